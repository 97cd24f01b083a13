//! Repository trait for link storage.

use crate::domain::entities::{Link, LinkFields};
use crate::error::AppError;
use async_trait::async_trait;

/// The link store.
///
/// Implementations persist exactly the [`LinkFields`] they are handed; deriving
/// `branded_link` is the caller's job (see [`crate::domain::hooks`]).
/// Timestamps are maintained by the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a link with the same subdomain and name exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, fields: LinkFields) -> Result<Link, AppError>;

    /// Finds a link by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds the link for a `(name, subdomain)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name_and_subdomain(
        &self,
        name: &str,
        subdomain: &str,
    ) -> Result<Option<Link>, AppError>;

    /// Lists links, newest first.
    ///
    /// # Arguments
    ///
    /// - `offset`, `limit` - pagination window
    /// - `subdomain` - optional exact-match filter
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        subdomain: Option<String>,
    ) -> Result<Vec<Link>, AppError>;

    /// Counts links, optionally filtered by subdomain.
    async fn count(&self, subdomain: Option<String>) -> Result<i64, AppError>;

    /// Overwrites the writable fields of a link and bumps `updated_at`.
    ///
    /// Returns `Ok(None)` if no link has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new subdomain/name pair is taken.
    async fn update(&self, id: i64, fields: LinkFields) -> Result<Option<Link>, AppError>;

    /// Deletes a link. Returns `Ok(false)` if no link has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trips to the store, for health checks.
    async fn ping(&self) -> Result<(), AppError>;
}
