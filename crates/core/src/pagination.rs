//! Page window arithmetic shared by every listing.
//!
//! Raw `page` / `limit` values are clamped here rather than rejected: a
//! numeric value that is out of range is corrected, only a non-numeric value
//! is a caller error (see [`crate::params`]).

use serde::Serialize;

/// Hard upper bound on rows returned by a single listing page.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Page size used when the caller does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A validated page window. `page >= 1`, `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a window from optional caller values, clamping both.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: clamp_limit(limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// A page of listing results plus the unwindowed total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl<T> Page<T> {
    /// An empty page for the given window. `total` is zero.
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Convert every item, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let req = PageRequest::new(None, None);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn limit_is_clamped_to_max_page_size() {
        let req = PageRequest::new(Some(1), Some(1000));
        assert_eq!(req.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn limit_floors_at_one() {
        assert_eq!(PageRequest::new(None, Some(0)).limit, 1);
        assert_eq!(PageRequest::new(None, Some(-7)).limit, 1);
    }

    #[test]
    fn page_floors_at_one() {
        assert_eq!(PageRequest::new(Some(0), None).page, 1);
        assert_eq!(PageRequest::new(Some(-3), None).page, 1);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let req = PageRequest::new(Some(4), Some(10));
        assert_eq!(req.offset(), 30);
    }

    #[test]
    fn empty_page_keeps_window() {
        let page: Page<i32> = Page::empty(PageRequest::new(Some(3), Some(5)));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page {
            items: vec![1, 2],
            total: 9,
            page: 2,
            limit: 2,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 9);
    }
}
