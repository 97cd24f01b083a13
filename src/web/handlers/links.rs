//! Link administration pages.
//!
//! Classic resource routes: index, new, create, show, edit, update, destroy.
//! Successful writes redirect (`303 See Other`) and carry a `notice` query
//! parameter that the target page turns into a flash message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::dto::link::LinkInput;
use crate::api::dto::pagination::LinkListParams;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::HtmlError;

/// Flash message carried across a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}

impl NoticeParams {
    fn message(&self) -> Option<&'static str> {
        match self.notice.as_deref()? {
            "created" => Some("Link was successfully created."),
            "updated" => Some("Link was successfully updated."),
            "destroyed" => Some("Link was successfully destroyed."),
            _ => None,
        }
    }
}

/// Body of the link forms.
///
/// `_method` lets a browser `POST` stand in for `PATCH`/`PUT`/`DELETE`.
#[derive(Debug, Deserialize)]
pub struct LinkFormBody {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,
    #[serde(flatten)]
    pub link: LinkInput,
}

#[derive(Template, WebTemplate)]
#[template(path = "links/index.html")]
struct IndexTemplate {
    links: Vec<Link>,
    total: i64,
    page: u32,
    page_count: u32,
    prev_page: Option<u32>,
    next_page: Option<u32>,
    subdomain: String,
    filter_query: String,
    notice: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "links/show.html")]
struct ShowTemplate {
    link: Link,
    notice: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "links/new.html")]
struct NewTemplate {
    form: LinkInput,
    errors: Vec<String>,
    action: String,
    method_override: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "links/edit.html")]
struct EditTemplate {
    id: i64,
    form: LinkInput,
    errors: Vec<String>,
    action: String,
    method_override: Option<&'static str>,
}

impl NewTemplate {
    fn new(form: LinkInput, errors: Vec<String>) -> Self {
        Self {
            form,
            errors,
            action: "/links".to_string(),
            method_override: None,
        }
    }
}

impl EditTemplate {
    fn new(id: i64, form: LinkInput, errors: Vec<String>) -> Self {
        Self {
            id,
            form,
            errors,
            action: format!("/links/{id}"),
            method_override: Some("patch"),
        }
    }
}

/// Flattens a validation or conflict error into form messages.
fn form_errors(e: &AppError) -> Vec<String> {
    let mut messages: Vec<String> = match (e, e.details().as_object()) {
        (AppError::Validation { .. }, Some(fields)) => fields
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .as_array()
                    .into_iter()
                    .flatten()
                    .filter_map(|m| m.as_str())
                    .map(move |m| format!("{field}: {m}"))
            })
            .collect(),
        _ => Vec::new(),
    };

    if messages.is_empty() {
        messages.push(e.to_string());
    }
    messages
}

/// Errors the user can fix by editing the form.
fn is_form_error(e: &AppError) -> bool {
    matches!(e, AppError::Validation { .. } | AppError::Conflict { .. })
}

/// Lists links.
///
/// # Endpoint
///
/// `GET /links?page=1&page_size=25&subdomain=radd`
pub async fn index_handler(
    State(state): State<AppState>,
    params: Result<Query<LinkListParams>, QueryRejection>,
    Query(notice): Query<NoticeParams>,
) -> Result<Response, HtmlError> {
    let Query(params) = params.map_err(AppError::from)?;
    let window = params.window()?;

    let page = state
        .link_service
        .list_links(window.offset(), window.limit(), params.subdomain.clone())
        .await?;

    let page_count = window.page_count(page.total);
    let subdomain = params.subdomain.unwrap_or_default();
    let filter_query = if subdomain.is_empty() {
        String::new()
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(subdomain.as_bytes()).collect();
        format!("&subdomain={encoded}")
    };

    Ok(IndexTemplate {
        links: page.links,
        total: page.total,
        page: window.page,
        page_count,
        prev_page: (window.page > 1).then(|| window.page - 1),
        next_page: (window.page < page_count).then(|| window.page + 1),
        subdomain,
        filter_query,
        notice: notice.message(),
    }
    .into_response())
}

/// Renders an empty link form.
///
/// # Endpoint
///
/// `GET /links/new`
pub async fn new_handler() -> impl IntoResponse {
    NewTemplate::new(LinkInput::default(), Vec::new())
}

/// Creates a link from the submitted form.
///
/// # Endpoint
///
/// `POST /links`
///
/// Re-renders the form with `422 Unprocessable Entity` on validation errors
/// or a subdomain/name collision.
pub async fn create_handler(
    State(state): State<AppState>,
    Form(body): Form<LinkFormBody>,
) -> Result<Response, HtmlError> {
    let form = body.link;

    if let Err(e) = form.validate() {
        let errors = form_errors(&AppError::from(e));
        return Ok(
            (StatusCode::UNPROCESSABLE_ENTITY, NewTemplate::new(form, errors)).into_response(),
        );
    }

    match state.link_service.create_link(form.clone().into()).await {
        Ok(link) => Ok(Redirect::to(&format!("/links/{}?notice=created", link.id)).into_response()),
        Err(e) if is_form_error(&e) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            NewTemplate::new(form, form_errors(&e)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Shows a single link.
///
/// # Endpoint
///
/// `GET /links/{id}`
pub async fn show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Query(notice): Query<NoticeParams>,
) -> Result<Response, HtmlError> {
    let link = state.link_service.get_link(id).await?;

    Ok(ShowTemplate {
        link,
        notice: notice.message(),
    }
    .into_response())
}

/// Renders the edit form for a link.
///
/// # Endpoint
///
/// `GET /links/{id}/edit`
pub async fn edit_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, HtmlError> {
    let link = state.link_service.get_link(id).await?;

    Ok(EditTemplate::new(id, LinkInput::from(&link), Vec::new()).into_response())
}

/// Updates a link from the submitted form.
///
/// # Endpoint
///
/// `PUT /links/{id}`, `PATCH /links/{id}`
pub async fn update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(body): Form<LinkFormBody>,
) -> Result<Response, HtmlError> {
    update(&state, id, body.link).await
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
pub async fn destroy_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, HtmlError> {
    destroy(&state, id).await
}

/// Dispatches a browser form post on the `_method` field.
///
/// # Endpoint
///
/// `POST /links/{id}` with `_method=patch|put|delete`
pub async fn form_dispatch_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(body): Form<LinkFormBody>,
) -> Result<Response, HtmlError> {
    let method = body.method.as_deref().map(str::to_ascii_lowercase);

    match method.as_deref() {
        Some("patch") | Some("put") => update(&state, id, body.link).await,
        Some("delete") => destroy(&state, id).await,
        other => Err(AppError::bad_request(
            "Unsupported form method",
            serde_json::json!({ "_method": other }),
        )
        .into()),
    }
}

async fn update(state: &AppState, id: i64, form: LinkInput) -> Result<Response, HtmlError> {
    if let Err(e) = form.validate() {
        let errors = form_errors(&AppError::from(e));
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            EditTemplate::new(id, form, errors),
        )
            .into_response());
    }

    match state.link_service.update_link(id, form.clone().into()).await {
        Ok(link) => Ok(Redirect::to(&format!("/links/{}?notice=updated", link.id)).into_response()),
        Err(e) if is_form_error(&e) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            EditTemplate::new(id, form, form_errors(&e)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

async fn destroy(state: &AppState, id: i64) -> Result<Response, HtmlError> {
    state.link_service.delete_link(id).await?;
    Ok(Redirect::to("/links?notice=destroyed").into_response())
}
