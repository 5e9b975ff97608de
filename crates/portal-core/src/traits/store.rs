//! Storage collaborator trait consumed by the query layer.

use async_trait::async_trait;

use crate::query::plan::QueryPlan;
use crate::result::AppResult;

use super::content::Content;

/// Generic query-builder capability over one content type.
///
/// Implementations must honor every [`Condition`](crate::query::plan::Condition)
/// and [`OrderTerm`](crate::query::plan::OrderTerm) of a plan. Failures are
/// reported as `CollaboratorUnavailable`; the core does not retry.
#[async_trait]
pub trait ContentStore<E: Content>: Send + Sync + 'static {
    /// Count rows matching the plan's conditions (ordering ignored).
    async fn count(&self, plan: &QueryPlan) -> AppResult<u64>;

    /// Fetch the ordered slice `[offset, offset + limit)`.
    async fn fetch(&self, plan: &QueryPlan, offset: u64, limit: u64) -> AppResult<Vec<E>>;

    /// Find a row by identity.
    async fn find(&self, id: i64) -> AppResult<Option<E>>;

    /// Insert a row; identity and timestamps are assigned by storage.
    async fn insert(&self, entity: &E) -> AppResult<E>;

    /// Replace the writable columns of row `id`. `None` if absent.
    async fn update(&self, id: i64, entity: &E) -> AppResult<Option<E>>;

    /// Delete row `id`. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Atomically add one to an integer column. `false` if the row is absent.
    async fn increment(&self, id: i64, column: &'static str) -> AppResult<bool>;
}
