use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Postal and contact details shared by districts, clubs and lifters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactInformation {
    pub id: i32,
    pub address: String,
    pub postal_code: Option<String>,
    pub postal_city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Table for ContactInformation {
    const NAME: &'static str = "contact_information";
}
