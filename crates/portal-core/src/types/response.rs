//! Wire envelopes shared by every entity type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::content::{Presentation, Resource};

use super::pagination::Page;

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total matching items.
    pub total: u64,
    /// Last page number (at least 1).
    pub last_page: u64,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            current_page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page,
        }
    }
}

/// `{ "data": [...], "pagination": {...} }`, identical for every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T = Value> {
    /// The page items.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

impl ListEnvelope<Value> {
    /// Project a page of entities for the given presentation.
    pub fn from_page<E: Resource>(page: Page<E>, presentation: &Presentation) -> Self {
        let pagination = PaginationMeta::from(&page);
        Self {
            data: page
                .items
                .iter()
                .map(|item| item.to_resource(presentation))
                .collect(),
            pagination,
        }
    }
}

/// `{ "data": {...} }`, the single shape of every detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T = Value> {
    /// The entity.
    pub data: T,
}

impl DataEnvelope<Value> {
    /// Project one entity for the given presentation.
    pub fn from_entity<E: Resource>(entity: &E, presentation: &Presentation) -> Self {
        Self {
            data: entity.to_resource(presentation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pagination::PageRequest;

    struct Slide(&'static str);

    impl Resource for Slide {
        fn to_resource(&self, _: &Presentation) -> Value {
            serde_json::json!({ "title": self.0 })
        }
    }

    #[test]
    fn test_empty_collection_envelope() {
        let page: Page<Slide> = Page::empty(&PageRequest::new(1, 15));
        let envelope = ListEnvelope::from_page(page, &Presentation::AllLocales);
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialize"),
            serde_json::json!({
                "data": [],
                "pagination": { "current_page": 1, "per_page": 15, "total": 0, "last_page": 1 }
            })
        );
    }

    #[test]
    fn test_items_projected_in_order() {
        let page = Page::new(vec![Slide("a"), Slide("b")], &PageRequest::new(2, 2), 5);
        let envelope = ListEnvelope::from_page(page, &Presentation::AllLocales);
        assert_eq!(envelope.data[1]["title"], "b");
        assert_eq!(envelope.pagination.last_page, 3);
    }
}
