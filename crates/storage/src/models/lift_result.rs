use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{CompetitionType, Discipline};
use crate::schema::Table;

/// Result of a single discipline attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LiftResult {
    pub id: i32,
    pub removed: bool,
    pub order_number: Option<i16>,
    pub result: Decimal,
    pub discipline: Discipline,
    pub competition_type: CompetitionType,
    pub collected_result_id: i32,
}

impl Table for LiftResult {
    const NAME: &'static str = "results";
}
