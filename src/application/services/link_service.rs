//! Link administration service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkFields, LinkPatch, NewLink};
use crate::domain::hooks::HookChain;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// A page of links plus the total matching count.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub total: i64,
}

/// Store-access layer for links.
///
/// Every write goes through here so the [`HookChain`] runs on the exact
/// field values about to be persisted.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    hooks: HookChain,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, hooks: HookChain) -> Self {
        Self { repository, hooks }
    }

    /// Creates a link after running `before_save` hooks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the subdomain/name pair is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut fields = LinkFields::from(new_link);
        self.hooks.run_before_save(&mut fields);

        let link = self.repository.create(fields).await?;
        tracing::info!(id = link.id, branded_link = %link.branded_link, "Link created");

        Ok(link)
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Lists links newest first.
    pub async fn list_links(
        &self,
        offset: i64,
        limit: i64,
        subdomain: Option<String>,
    ) -> Result<LinkPage, AppError> {
        let links = self
            .repository
            .list(offset, limit, subdomain.clone())
            .await?;
        let total = self.repository.count(subdomain).await?;

        Ok(LinkPage { links, total })
    }

    /// Applies a partial update.
    ///
    /// The patch is merged onto the current record, `before_update` hooks run
    /// on the merged values, then the full field set is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Conflict`] if the new subdomain/name pair is taken.
    pub async fn update_link(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        let current = self.get_link(id).await?;

        let mut fields = current.fields();
        patch.apply(&mut fields);
        self.hooks.run_before_update(&mut fields);

        let link = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| link_not_found(id))?;
        tracing::info!(id, branded_link = %link.branded_link, "Link updated");

        Ok(link)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(link_not_found(id));
        }
        tracing::info!(id, "Link deleted");

        Ok(())
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn link_not_found(id: i64) -> AppError {
    AppError::not_found("Link not found", json!({ "id": id }))
}
