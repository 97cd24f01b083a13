//! Browser-facing HTML layer.
//!
//! Server-side rendered with Askama templates from `templates/`.
//!
//! - [`handlers`] - welcome page, deep-link catch-all, link administration pages
//! - [`routes`] - `/links` route configuration

pub mod handlers;
pub mod routes;
