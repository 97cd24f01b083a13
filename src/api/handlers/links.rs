//! JSON handlers for link administration.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{LinkInput, LinkListResponse, LinkResponse, UpdateLinkRequest};
use crate::api::dto::pagination::LinkListParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?page=1&page_size=25&subdomain=radd`
///
/// # Errors
///
/// Returns 400 Bad Request for malformed or invalid pagination parameters.
pub async fn list_links_handler(
    State(state): State<AppState>,
    params: Result<Query<LinkListParams>, QueryRejection>,
) -> Result<Json<LinkListResponse>, AppError> {
    let Query(params) = params?;
    let window = params.window()?;

    let page = state
        .link_service
        .list_links(window.offset(), window.limit(), params.subdomain)
        .await?;

    Ok(Json(LinkListResponse {
        page: window.page,
        page_size: window.page_size,
        total: page.total,
        items: page.links.into_iter().map(LinkResponse::from).collect(),
    }))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "get",
///   "subdomain": "radd",
///   "deep_link": "https://raddonline.com/products/GottaGet"
/// }
/// ```
///
/// `branded_link` is derived (`radd.dal.io/get`) and cannot be supplied.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the subdomain/name pair already exists.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkInput>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;
    Ok(Json(link.into()))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}` (also `PUT`)
///
/// Only provided fields change; `branded_link` is recomputed from the
/// resulting subdomain and name.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 409 Conflict if the new subdomain/name pair already exists.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.update_link(id, payload.into()).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
