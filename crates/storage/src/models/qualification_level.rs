use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct QualificationLevel {
    pub id: i32,
    pub category_id: i32,
    pub qualification_limit: i16,
}

impl Table for QualificationLevel {
    const NAME: &'static str = "qualification_levels";
}
