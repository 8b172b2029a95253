use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Team result for one round of a division.
///
/// The contributing results are linked through `series_team_result_results`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeriesTeamResult {
    pub id: i32,
    pub team_id: i32,
    pub round_id: i32,
}

impl Table for SeriesTeamResult {
    const NAME: &'static str = "series_team_results";
}
