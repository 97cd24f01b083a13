//! Welcome page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{HeaderMap, Uri},
    response::IntoResponse,
};

use crate::utils::extract_host::request_host;

/// Template for the welcome page.
///
/// Renders `templates/welcome.html`. Also used as the fallback page when a
/// deep link cannot be resolved.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub host: String,
}

/// Renders the welcome page.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler(headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    WelcomeTemplate {
        host: request_host(&headers, &uri).unwrap_or_default(),
    }
}
