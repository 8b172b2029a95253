use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::JudgeLevel;
use crate::schema::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeLicense {
    pub id: i32,
    pub lifter_id: i32,
    pub judge_level: JudgeLevel,
    pub book_number: i16,
    pub approved: bool,
    pub year: i16,
}

impl Table for JudgeLicense {
    const NAME: &'static str = "judge_licenses";
}
