//! HTML rendering handlers.

mod error;
mod links;
mod redirect;
mod welcome;

pub use error::HtmlError;
pub use links::{
    create_handler, destroy_handler, edit_handler, form_dispatch_handler, index_handler,
    new_handler, show_handler, update_handler,
};
pub use redirect::deep_link_handler;
pub use welcome::{WelcomeTemplate, welcome_handler};
