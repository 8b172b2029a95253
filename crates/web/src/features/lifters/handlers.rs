use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::lifter::{LifterRequest, LifterResponse},
    error::StorageError,
};
use std::num::IntErrorKind;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

type IdPath = Result<Path<String>, PathRejection>;

/// Parses the `:id` segment. A well-formed integer outside the key range
/// cannot name a stored lifter and is reported as not found.
fn lifter_id(path: IdPath) -> WebResult<i32> {
    let Path(raw) = path?;

    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            WebError::Storage(StorageError::NotFound)
        }
        _ => WebError::Rejected(
            StatusCode::BAD_REQUEST,
            format!("Invalid lifter id `{raw}`: {e}"),
        ),
    })
}

#[utoipa::path(
    get,
    path = "/lifter",
    responses(
        (status = 200, description = "List all lifters successfully", body = Vec<LifterResponse>)
    ),
    tag = "lifters"
)]
pub async fn list_lifters(State(db): State<Database>) -> WebResult<Response> {
    let lifters = services::list_lifters(db.pool()).await?;

    let response: Vec<LifterResponse> = lifters.into_iter().map(LifterResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/lifter/{id}",
    params(
        ("id" = i32, Path, description = "Lifter ID")
    ),
    responses(
        (status = 200, description = "Lifter found", body = LifterResponse),
        (status = 404, description = "Lifter not found")
    ),
    tag = "lifters"
)]
pub async fn get_lifter(State(db): State<Database>, id: IdPath) -> WebResult<Response> {
    let id = lifter_id(id)?;
    let lifter = services::get_lifter(db.pool(), id).await?;

    Ok(Json(LifterResponse::from(lifter)).into_response())
}

#[utoipa::path(
    post,
    path = "/lifter",
    request_body = LifterRequest,
    responses(
        (status = 201, description = "Lifter created successfully", body = LifterResponse),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Malformed request body")
    ),
    tag = "lifters"
)]
pub async fn create_lifter(
    State(db): State<Database>,
    payload: Result<Json<LifterRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let lifter = services::create_lifter(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(LifterResponse::from(lifter))).into_response())
}

#[utoipa::path(
    put,
    path = "/lifter/{id}",
    params(
        ("id" = i32, Path, description = "Lifter ID")
    ),
    request_body = LifterRequest,
    responses(
        (status = 200, description = "Lifter and contact information updated", body = LifterResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Lifter not found"),
        (status = 422, description = "Malformed request body")
    ),
    tag = "lifters"
)]
pub async fn update_lifter(
    State(db): State<Database>,
    id: IdPath,
    payload: Result<Json<LifterRequest>, JsonRejection>,
) -> WebResult<Response> {
    let id = lifter_id(id)?;
    let Json(req) = payload?;
    req.validate()?;

    let updated = services::update_lifter(db.pool(), id, &req).await?;

    Ok(Json(LifterResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/lifter/{id}",
    params(
        ("id" = i32, Path, description = "Lifter ID")
    ),
    responses(
        (status = 200, description = "Lifter deleted", body = String),
        (status = 404, description = "Lifter not found")
    ),
    tag = "lifters"
)]
pub async fn delete_lifter(
    State(db): State<Database>,
    id: IdPath,
) -> WebResult<Response> {
    let id = lifter_id(id)?;
    services::delete_lifter(db.pool(), id).await?;

    Ok(Json(format!("deleted lifter with id {id}")).into_response())
}
