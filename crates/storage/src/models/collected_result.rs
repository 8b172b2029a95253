use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// A lifter's weigh-in and category for one event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CollectedResult {
    pub id: i32,
    pub lifter_id: i32,
    pub weighin_weight: Decimal,
    pub weight_class_id: i32,
    pub category_id: i32,
}

impl Table for CollectedResult {
    const NAME: &'static str = "collected_results";
}
