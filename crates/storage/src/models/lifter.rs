use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{ContactInformation, Gender};
use crate::schema::Table;

/// An athlete. Club memberships are linked through `lifter_clubs`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lifter {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub contact_information_id: i32,
    pub gender: Gender,
    pub id_number: String,
    pub created_at: NaiveDateTime,
}

impl Table for Lifter {
    const NAME: &'static str = "lifters";
}

/// A lifter loaded together with the contact information it references.
#[derive(Debug, Clone)]
pub struct LifterWithContact {
    pub lifter: Lifter,
    pub contact_information: ContactInformation,
}
