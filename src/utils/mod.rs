//! Request helpers.
//!
//! - [`extract_host`] - host and brand extraction from HTTP requests

pub mod extract_host;
