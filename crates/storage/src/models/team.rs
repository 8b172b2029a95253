use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// A club's entry in a division.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: i32,
    pub club_id: i32,
    pub current_division_id: i32,
}

impl Table for Team {
    const NAME: &'static str = "teams";
}
