use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Bodyweight bracket in kilograms.
///
/// Archived classes stay readable so historical results keep their class.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightClass {
    pub id: i32,
    pub min_weight: i16,
    pub max_weight: i16,
    pub archived: bool,
}

impl Table for WeightClass {
    const NAME: &'static str = "weight_classes";
}
