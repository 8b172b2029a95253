use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Announced competition open for signup.
///
/// Categories, documents and qualification levels are linked through the
/// `invitation_*` join tables.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invitation {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub organizer_id: i32,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
    pub last_signup: NaiveDate,
    pub contact_id: i32,
    pub competition_types: String,
    pub affects_ranking: bool,
}

impl Table for Invitation {
    const NAME: &'static str = "invitations";
}
