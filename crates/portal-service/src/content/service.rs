//! The generic content service.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use validator::Validate;

use portal_core::config::ListingConfig;
use portal_core::error::AppError;
use portal_core::query::{ListingProfile, paginate};
use portal_core::result::AppResult;
use portal_core::traits::{Content, ContentStore};
use portal_core::types::{ListRequest, Locale, Page};

/// List, detail and management operations for one content type.
///
/// Every storage call is bounded by the configured query timeout; on
/// expiry the operation fails with `Timeout` and nothing partial is
/// returned.
pub struct ContentService<E: Content> {
    /// Storage collaborator.
    pub(crate) store: Arc<dyn ContentStore<E>>,
    /// Search, sort and filter declarations, built once.
    profile: Arc<ListingProfile>,
    /// Page size defaults and limits.
    config: ListingConfig,
}

impl<E: Content> ContentService<E> {
    /// Creates a new content service.
    pub fn new(store: Arc<dyn ContentStore<E>>, config: ListingConfig) -> Self {
        Self {
            store,
            profile: Arc::new(E::listing()),
            config,
        }
    }

    /// The entity's listing declarations.
    pub fn profile(&self) -> &ListingProfile {
        &self.profile
    }

    /// Normalize raw query parameters for this content type.
    pub fn list_request(&self, params: &HashMap<String, String>, fallback: Locale) -> ListRequest {
        ListRequest::normalize(params, fallback, &self.profile, &self.config)
    }

    /// Public listing: only rows inside the public scope.
    pub async fn list(&self, request: &ListRequest) -> AppResult<Page<E>> {
        let plan = self.profile.compose(request, E::public_scope());
        debug!(table = E::TABLE, ?request, "Listing public content");
        paginate(self.store.as_ref(), &plan, &request.page, self.timeout()).await
    }

    /// Management listing: every row.
    pub async fn list_all(&self, request: &ListRequest) -> AppResult<Page<E>> {
        let plan = self.profile.compose(request, None);
        debug!(table = E::TABLE, ?request, "Listing all content");
        paginate(self.store.as_ref(), &plan, &request.page, self.timeout()).await
    }

    /// Public detail. Rows outside the public scope are reported as absent.
    pub async fn find_public(&self, id: i64) -> AppResult<E> {
        let entity = self.find(id).await?;
        let visible = E::public_scope().is_none_or(|scope| scope.is_satisfied_by(&entity));
        if !visible {
            debug!(table = E::TABLE, id, "Hidden content requested");
            return Err(self.not_found(id));
        }
        Ok(entity)
    }

    /// Management detail.
    pub async fn find(&self, id: i64) -> AppResult<E> {
        self.bounded(self.store.find(id))
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Validate and store a new row.
    pub async fn create(&self, entity: E) -> AppResult<E> {
        entity.validate()?;
        let created = self.bounded(self.store.insert(&entity)).await?;
        info!(table = E::TABLE, id = created.id(), "Content created");
        Ok(created)
    }

    /// Validate and replace the writable columns of row `id`.
    pub async fn update(&self, id: i64, entity: E) -> AppResult<E> {
        entity.validate()?;
        let updated = self
            .bounded(self.store.update(id, &entity))
            .await?
            .ok_or_else(|| self.not_found(id))?;
        info!(table = E::TABLE, id, "Content updated");
        Ok(updated)
    }

    /// Delete row `id`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.bounded(self.store.delete(id)).await? {
            return Err(self.not_found(id));
        }
        info!(table = E::TABLE, id, "Content deleted");
        Ok(())
    }

    fn timeout(&self) -> Duration {
        self.config.query_timeout()
    }

    /// Run a single storage call under the query timeout.
    pub(crate) async fn bounded<T>(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        let timeout = self.timeout();
        tokio::time::timeout(timeout, call).await.map_err(|_| {
            AppError::timeout(format!(
                "Storage call on {} did not complete within {}ms",
                E::TABLE,
                timeout.as_millis()
            ))
        })?
    }

    pub(crate) fn not_found(&self, id: i64) -> AppError {
        AppError::not_found(format!("{} {id} not found", E::SEGMENT))
    }
}

impl<E: Content> std::fmt::Debug for ContentService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("table", &E::TABLE)
            .field("profile", &self.profile)
            .finish()
    }
}
