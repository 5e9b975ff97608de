//! News-specific use cases.

use tracing::debug;

use portal_core::result::AppResult;
use portal_entity::News;

use super::service::ContentService;

impl ContentService<News> {
    /// Public detail that counts as a view.
    ///
    /// The counter is bumped by its own storage write after the item is
    /// found; the returned item is re-read so it carries the new count.
    pub async fn show(&self, id: i64) -> AppResult<News> {
        self.find_public(id).await?;

        if !self
            .bounded(self.store.increment(id, News::VIEWS_COLUMN))
            .await?
        {
            return Err(self.not_found(id));
        }
        debug!(id, "News view recorded");

        self.find_public(id).await
    }
}
