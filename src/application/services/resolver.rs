//! Deep-link resolution: request host + path to a redirect decision.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::utils::extract_host::brand_from_host;

/// Outcome of resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect to the stored deep link.
    Redirect(String),
    /// No usable link; render the welcome page.
    Fallback,
}

/// Resolves `brand.<anything>/<name>` to the stored deep link.
///
/// Stateless apart from the store handle. Store failures are logged and
/// collapse into [`Resolution::Fallback`]; callers never see an error.
pub struct DeepLinkResolver {
    repository: Arc<dyn LinkRepository>,
}

impl DeepLinkResolver {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a request.
    ///
    /// # Arguments
    ///
    /// - `host` - raw request host (port allowed)
    /// - `path` - the wildcard path without the leading `/`
    ///
    /// The brand is lowercased before lookup; stored subdomains are lowercase.
    pub async fn resolve(&self, host: &str, path: &str) -> Resolution {
        let brand = brand_from_host(host).to_ascii_lowercase();

        match self
            .repository
            .find_by_name_and_subdomain(path, &brand)
            .await
        {
            Ok(Some(link)) => {
                tracing::debug!(%brand, path, deep_link = %link.deep_link, "Deep link resolved");
                Resolution::Redirect(link.deep_link)
            }
            Ok(None) => {
                tracing::debug!(%brand, path, "No deep link, rendering welcome page");
                Resolution::Fallback
            }
            Err(e) => {
                tracing::error!(
                    %brand,
                    path,
                    error = %e,
                    "Deep link lookup failed, rendering welcome page"
                );
                Resolution::Fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    fn radd_get() -> Link {
        let now = Utc::now();
        Link {
            id: 1,
            name: "get".to_string(),
            subdomain: "radd".to_string(),
            deep_link: "https://raddonline.com/products/GottaGet".to_string(),
            branded_link: "radd.dal.io/get".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .withf(|name, subdomain| name == "get" && subdomain == "radd")
            .times(1)
            .returning(|_, _| Ok(Some(radd_get())));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        assert_eq!(
            resolver.resolve("radd.dal.io", "get").await,
            Resolution::Redirect("https://raddonline.com/products/GottaGet".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_uses_brand_without_port() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .withf(|name, subdomain| name == "get" && subdomain == "radd")
            .times(1)
            .returning(|_, _| Ok(Some(radd_get())));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        assert!(matches!(
            resolver.resolve("radd.localhost:3000", "get").await,
            Resolution::Redirect(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_lowercases_brand() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .withf(|name, subdomain| name == "get" && subdomain == "radd")
            .times(1)
            .returning(|_, _| Ok(Some(radd_get())));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        assert!(matches!(
            resolver.resolve("RADD.dal.io", "get").await,
            Resolution::Redirect(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .times(1)
            .returning(|_, _| Ok(None));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        assert_eq!(
            resolver.resolve("unknownbrand.dal.io", "missing").await,
            Resolution::Fallback
        );
    }

    #[tokio::test]
    async fn test_resolve_store_error_falls_back() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        assert_eq!(
            resolver.resolve("radd.dal.io", "get").await,
            Resolution::Fallback
        );
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_name_and_subdomain()
            .times(2)
            .returning(|_, _| Ok(Some(radd_get())));

        let resolver = DeepLinkResolver::new(Arc::new(repo));

        let first = resolver.resolve("radd.dal.io", "get").await;
        let second = resolver.resolve("radd.dal.io", "get").await;

        assert_eq!(first, second);
    }
}
