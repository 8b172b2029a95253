use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Annual fee record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fee {
    pub id: i32,
    pub year: i16,
    pub invoiced_at: Option<NaiveDateTime>,
    pub paid_at: Option<NaiveDateTime>,
}

impl Table for Fee {
    const NAME: &'static str = "fees";
}
