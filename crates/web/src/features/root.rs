use axum::{Json, Router, routing::get};
use storage::Database;

pub const BANNER: &str = "Stark Lifter database system";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = String)
    ),
    tag = "meta"
)]
pub async fn banner() -> Json<&'static str> {
    Json(BANNER)
}

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(banner))
}
