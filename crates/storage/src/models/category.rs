use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Gender;
use crate::schema::Table;

/// Gender, weight class and age bracket a lifter competes within.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub gender: Gender,
    pub weight_class_id: i32,
    pub age_bracket_id: i32,
}

impl Table for Category {
    const NAME: &'static str = "categories";
}
