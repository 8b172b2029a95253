use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Round {
    pub id: i32,
    pub number: i16,
    pub division_id: i32,
}

impl Table for Round {
    const NAME: &'static str = "rounds";
}
