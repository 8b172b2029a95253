use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::LicenseStatus;
use crate::schema::Table;

/// Yearly license allowing a lifter to compete for a club.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct License {
    pub id: i32,
    pub lifter_id: i32,
    pub club_id: i32,
    pub number: String,
    pub year: i16,
    pub requested: NaiveDateTime,
    pub canceled_at: Option<NaiveDateTime>,
    pub status: LicenseStatus,
}

impl Table for License {
    const NAME: &'static str = "licenses";
}
