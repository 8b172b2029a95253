use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_lifter, delete_lifter, get_lifter, list_lifters, update_lifter};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/lifter", get(list_lifters).post(create_lifter))
        .route(
            "/lifter/:id",
            get(get_lifter).put(update_lifter).delete(delete_lifter),
        )
}
