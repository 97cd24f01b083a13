//! Application context shared by all handlers.

use std::sync::Arc;

use crate::application::services::{DeepLinkResolver, LinkService};
use crate::domain::hooks::HookChain;
use crate::domain::repositories::LinkRepository;

/// Application context built once at startup and injected into the router.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub resolver: Arc<DeepLinkResolver>,
}

impl AppState {
    /// Wires services around a single link store.
    pub fn new(repository: Arc<dyn LinkRepository>, hooks: HookChain) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), hooks)),
            resolver: Arc::new(DeepLinkResolver::new(repository)),
        }
    }
}
