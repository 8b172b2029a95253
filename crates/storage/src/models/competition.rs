use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Held instance of an invitation. Results are linked through `competition_results`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub id: i32,
    pub invitation_id: i32,
}

impl Table for Competition {
    const NAME: &'static str = "competitions";
}
