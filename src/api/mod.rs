//! JSON API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! - [`dto`] - request/response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - request tracing
//! - [`routes`] - route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
