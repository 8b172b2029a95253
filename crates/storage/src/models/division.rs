use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{CompetitionType, PointSystem};
use crate::schema::Table;

/// Competitive series running between `start` and `stop`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Division {
    pub id: i32,
    pub name: String,
    pub start: NaiveDate,
    pub stop: NaiveDate,
    pub max_lifters: i16,
    pub competition_type: CompetitionType,
    pub point_system: PointSystem,
}

impl Table for Division {
    const NAME: &'static str = "divisions";
}
