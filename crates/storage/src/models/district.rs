use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Regional federation body.
///
/// Contacts are linked through `district_contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct District {
    pub id: i32,
    pub name: String,
    pub rf_number: i16,
    pub org_number: String,
    pub contact_information_id: i32,
}

impl Table for District {
    const NAME: &'static str = "districts";
}
