//! Pre-persist callbacks for link records.
//!
//! The store-access layer ([`crate::application::services::LinkService`])
//! runs a [`HookChain`] synchronously on the in-memory field values right
//! before every create or update. Hooks run in registration order and cannot
//! fail.

use std::sync::Arc;

use crate::domain::entities::LinkFields;

/// Root domain used for branded links when none is configured.
pub const DEFAULT_BRAND_DOMAIN: &str = "dal.io";

/// A callback invoked before a link is written.
pub trait LinkHook: Send + Sync {
    /// Runs before a new record is persisted.
    fn before_save(&self, fields: &mut LinkFields);

    /// Runs before an existing record is updated.
    ///
    /// Defaults to [`LinkHook::before_save`].
    fn before_update(&self, fields: &mut LinkFields) {
        self.before_save(fields);
    }
}

/// Derives `branded_link` as `subdomain + "." + root + "/" + name`.
///
/// Empty segments are kept as-is, e.g. an empty name yields `"radd.dal.io/"`.
#[derive(Debug, Clone)]
pub struct BrandedLinkHook {
    root_domain: String,
}

impl BrandedLinkHook {
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
        }
    }

    /// Computes the branded link for a subdomain/name pair.
    pub fn branded_link(&self, subdomain: &str, name: &str) -> String {
        format!("{}.{}/{}", subdomain, self.root_domain, name)
    }
}

impl Default for BrandedLinkHook {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND_DOMAIN)
    }
}

impl LinkHook for BrandedLinkHook {
    fn before_save(&self, fields: &mut LinkFields) {
        fields.branded_link = self.branded_link(&fields.subdomain, &fields.name);
    }
}

/// Ordered list of hooks run before each write.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn LinkHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain every link store uses: branded link derivation only.
    pub fn standard(root_domain: impl Into<String>) -> Self {
        Self::new().with(BrandedLinkHook::new(root_domain))
    }

    /// Appends a hook to the end of the chain.
    pub fn with(mut self, hook: impl LinkHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn run_before_save(&self, fields: &mut LinkFields) {
        for hook in &self.hooks {
            hook.before_save(fields);
        }
    }

    pub fn run_before_update(&self, fields: &mut LinkFields) {
        for hook in &self.hooks {
            hook.before_update(fields);
        }
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
