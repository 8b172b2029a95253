use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AgeBracket {
    pub id: i32,
    pub name: String,
    pub min_age: i16,
    pub max_age: i16,
    pub archived: bool,
}

impl Table for AgeBracket {
    const NAME: &'static str = "age_brackets";
}
