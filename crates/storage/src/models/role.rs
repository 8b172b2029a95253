use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::RoleType;
use crate::schema::Table;

/// Administrative role held by a lifter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    pub id: i32,
    pub lifter_id: i32,
    pub role: RoleType,
}

impl Table for Role {
    const NAME: &'static str = "roles";
}
