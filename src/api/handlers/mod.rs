//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;

pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
