//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON link administration routes.
///
/// # Endpoints
///
/// - `GET    /links`        - List links (paginated)
/// - `POST   /links`        - Create a link
/// - `GET    /links/{id}`   - Show a link
/// - `PATCH  /links/{id}`   - Update a link (also `PUT`)
/// - `DELETE /links/{id}`   - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .patch(update_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
