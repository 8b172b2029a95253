use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::root::banner,
        features::lifters::handlers::list_lifters,
        features::lifters::handlers::get_lifter,
        features::lifters::handlers::create_lifter,
        features::lifters::handlers::update_lifter,
        features::lifters::handlers::delete_lifter,
    ),
    components(
        schemas(
            storage::dto::lifter::LifterRequest,
            storage::dto::lifter::LifterResponse,
            storage::models::ContactInformation,
            storage::models::Gender,
        )
    ),
    tags(
        (name = "lifters", description = "Lifter CRUD endpoints"),
        (name = "meta", description = "Service information"),
    )
)]
pub struct ApiDoc;

pub fn router(db: Database) -> Router {
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::root::routes())
        .merge(features::lifters::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
