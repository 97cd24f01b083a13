//! Application layer services.
//!
//! Services coordinate repository calls and domain rules and give HTTP
//! handlers (and the admin CLI) a single entry point.
//!
//! - [`services::link_service::LinkService`] - link CRUD with write hooks
//! - [`services::resolver::DeepLinkResolver`] - host + path to redirect decision

pub mod services;
