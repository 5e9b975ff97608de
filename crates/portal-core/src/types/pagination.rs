//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// A normalized page window (1-based page, positive size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. Zero values are raised to 1.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Calculate the `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// One bounded slice of an ordered result set plus its place in the whole.
///
/// `current_page` may exceed `last_page` when the caller asks beyond the
/// data; `items` is then empty while `total` and `last_page` stay accurate.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items on this page (at most `per_page`).
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub current_page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total matching items across all pages.
    pub total: u64,
    /// Last page number, never below 1.
    pub last_page: u64,
}

impl<T> Page<T> {
    /// Create a page from a fetched slice and the independent total.
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            current_page: request.page,
            per_page: request.page_size,
            total,
            last_page: last_page(total, request.page_size),
        }
    }

    /// Create an empty page.
    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Whether the requested page lies past the data.
    pub fn is_beyond_range(&self) -> bool {
        self.current_page > self.last_page
    }

    /// Project every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        }
    }
}

/// `max(1, ceil(total / per_page))`.
pub fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 15).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(0, 0).offset(), 0);
    }

    #[test]
    fn test_last_page_bounds() {
        assert_eq!(last_page(0, 15), 1);
        assert_eq!(last_page(15, 15), 1);
        assert_eq!(last_page(16, 15), 2);
        assert_eq!(last_page(7, 5), 2);
    }

    #[test]
    fn test_pages_partition_the_collection() {
        for total in 0u64..40 {
            for size in 1u64..9 {
                let last = last_page(total, size);
                let covered: u64 = (1..=last)
                    .map(|page| {
                        let offset = PageRequest::new(page, size).offset();
                        total.saturating_sub(offset).min(size)
                    })
                    .sum();
                assert_eq!(covered, total, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_beyond_range_page_keeps_totals() {
        let page: Page<u32> = Page::new(Vec::new(), &PageRequest::new(9, 5), 7);
        assert!(page.is_beyond_range());
        assert_eq!(page.total, 7);
        assert_eq!(page.last_page, 2);
    }
}
