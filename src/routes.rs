//! Top-level router.
//!
//! # Route Table
//!
//! Matched from most to least specific; the catch-all only sees requests no
//! other route claims.
//!
//! 1. `GET  /`              - Welcome page
//! 2. `GET  /health`        - Health check
//! 3. `/links/*`            - HTML link administration ([`crate::web::routes`])
//! 4. `/api/links/*`        - JSON link administration ([`crate::api::routes`])
//! 5. `/static/*`           - Static assets
//! 6. `ANY  /{*path}`       - Deep-link resolution
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash trimming, so `/get/` resolves like `/get`

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::{deep_link_handler, welcome_handler};
use axum::Router;
use axum::routing::{any, get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Path pattern of the deep-link catch-all.
pub const CATCH_ALL: &str = "/{*path}";

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .route(CATCH_ALL, any(deep_link_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Builds the service the server runs: [`router`] behind trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
