//! Pagination engine: count + slice against a storage collaborator.

use std::time::Duration;

use tracing::debug;

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::content::Content;
use crate::traits::store::ContentStore;
use crate::types::pagination::{Page, PageRequest};

use super::plan::QueryPlan;

/// Execute `plan` and return the requested page.
///
/// The total count and the ordered slice are independent reads and are
/// issued concurrently. The whole round is bounded by `timeout`; on expiry
/// the request fails as a unit and no partial page is produced.
pub async fn paginate<E, S>(
    store: &S,
    plan: &QueryPlan,
    request: &PageRequest,
    timeout: Duration,
) -> AppResult<Page<E>>
where
    E: Content,
    S: ContentStore<E> + ?Sized,
{
    let reads = async {
        tokio::try_join!(
            store.count(plan),
            store.fetch(plan, request.offset(), request.limit())
        )
    };

    let (total, items) = tokio::time::timeout(timeout, reads)
        .await
        .map_err(|_| {
            AppError::timeout(format!(
                "Listing {} did not complete within {}ms",
                E::TABLE,
                timeout.as_millis()
            ))
        })??;

    debug!(
        table = E::TABLE,
        page = request.page,
        per_page = request.page_size,
        total,
        returned = items.len(),
        "Page fetched"
    );

    Ok(Page::new(items, request, total))
}
