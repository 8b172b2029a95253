use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

/// Upper bound on `file`, enforced by a CHECK constraint.
pub const MAX_DOCUMENT_BYTES: usize = 10_000_000;

/// Opaque binary attachment, at most [`MAX_DOCUMENT_BYTES`] long.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Document {
    pub id: i32,
    pub file: Vec<u8>,
}

impl Table for Document {
    const NAME: &'static str = "documents";
}
