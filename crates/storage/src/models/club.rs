use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub district_id: i32,
    pub rf_number: i16,
    pub org_number: String,
    pub contact_information_id: i32,
}

impl Table for Club {
    const NAME: &'static str = "clubs";
}
