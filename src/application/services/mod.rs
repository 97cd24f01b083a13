//! Business logic services for the application layer.

pub mod link_service;
pub mod resolver;

pub use link_service::LinkService;
pub use resolver::{DeepLinkResolver, Resolution};
