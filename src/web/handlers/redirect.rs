//! Catch-all deep-link handler.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::application::services::Resolution;
use crate::state::AppState;
use crate::utils::extract_host::request_host;
use crate::web::handlers::WelcomeTemplate;

/// Redirects `brand.dal.io/{name}` to its stored deep link.
///
/// # Endpoint
///
/// `ANY /{*path}` (matched only when no other route does)
///
/// # Request Flow
///
/// 1. Take the host from the `Host` header (or URI authority)
/// 2. Resolve brand + path via [`crate::application::services::DeepLinkResolver`]
/// 3. Found: `302 Found` with `Location` set to the deep link
/// 4. Otherwise: `200 OK` with the welcome page
///
/// This handler never returns an error status. Store failures, undecodable
/// paths and deep links that cannot be sent as a header all end in the
/// welcome page.
pub async fn deep_link_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = request_host(&headers, &uri).unwrap_or_default();

    let path = match path {
        Ok(Path(path)) => path,
        Err(e) => {
            tracing::debug!(error = %e, "Undecodable deep link path");
            return WelcomeTemplate { host }.into_response();
        }
    };

    match state.resolver.resolve(&host, &path).await {
        Resolution::Redirect(deep_link) => match HeaderValue::try_from(deep_link.as_str()) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => {
                tracing::warn!(%host, %path, %deep_link, "Stored deep link is not a valid Location");
                WelcomeTemplate { host }.into_response()
            }
        },
        Resolution::Fallback => WelcomeTemplate { host }.into_response(),
    }
}
