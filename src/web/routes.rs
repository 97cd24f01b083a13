//! Link administration route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_handler, destroy_handler, edit_handler, form_dispatch_handler, index_handler,
    new_handler, show_handler, update_handler,
};
use axum::{Router, routing::get};

/// HTML resource routes for links.
///
/// # Endpoints
///
/// - `GET    /links`            - Index
/// - `GET    /links/new`        - New form
/// - `POST   /links`            - Create
/// - `GET    /links/{id}`       - Show
/// - `GET    /links/{id}/edit`  - Edit form
/// - `PUT    /links/{id}`       - Update (also `PATCH`)
/// - `DELETE /links/{id}`       - Destroy
/// - `POST   /links/{id}`       - Form post with `_method` override
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(index_handler).post(create_handler))
        .route("/links/new", get(new_handler))
        .route(
            "/links/{id}",
            get(show_handler)
                .put(update_handler)
                .patch(update_handler)
                .delete(destroy_handler)
                .post(form_dispatch_handler),
        )
        .route("/links/{id}/edit", get(edit_handler))
}
