//! Pagination state for paged catalog fetches.

use serde::{Deserialize, Serialize};

/// Default page size for the customer-facing listing.
pub const DEFAULT_PAGE_SIZE: i64 = 8;

/// Pagination state (1-indexed pages).
///
/// Page changes are taken verbatim. An out-of-range page is the server's
/// to answer (it comes back with an empty data set), so nothing is
/// clamped here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pager {
    page: i64,
    page_size: i64,
    total_records: i64,
}

impl Pager {
    /// Pager on page one with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Pager on page one with a specific page size.
    pub fn with_page_size(page_size: i64) -> Self {
        Self {
            page: 1,
            page_size,
            total_records: 0,
        }
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Items per page.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Total records reported by the latest fetch.
    pub fn total_records(&self) -> i64 {
        self.total_records
    }

    /// Move to a page, optionally changing the page size as well.
    pub fn set_page(&mut self, page: i64, page_size: Option<i64>) {
        self.page = page;
        if let Some(size) = page_size {
            self.page_size = size;
        }
    }

    /// Record the total reported by the latest fetch.
    pub fn record_total(&mut self, total_records: i64) {
        self.total_records = total_records;
    }

    /// Adopt the page size the server actually applied.
    pub fn sync_page_size(&mut self, page_size: i64) {
        self.page_size = page_size;
    }

    /// Total number of pages (at least one).
    pub fn total_pages(&self) -> i64 {
        if self.total_records == 0 || self.page_size <= 0 {
            1
        } else {
            (self.total_records + self.page_size - 1) / self.page_size
        }
    }

    /// Whether there is a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether there is a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// 1-indexed ordinal of the first item on this page.
    pub fn start_item(&self) -> i64 {
        if self.total_records == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-indexed ordinal of the last item on this page.
    pub fn end_item(&self) -> i64 {
        (self.page * self.page_size).min(self.total_records)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_defaults() {
        let p = Pager::new();
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.total_pages(), 1);
        assert!(p.is_first());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_set_page_keeps_size() {
        let mut p = Pager::new();
        p.set_page(3, None);
        assert_eq!(p.page(), 3);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_page_with_size() {
        let mut p = Pager::new();
        p.set_page(2, Some(20));
        assert_eq!(p.page(), 2);
        assert_eq!(p.page_size(), 20);
    }

    #[test]
    fn test_set_page_does_not_clamp() {
        let mut p = Pager::new();
        p.record_total(16); // two pages of eight
        p.set_page(999, None);
        assert_eq!(p.page(), 999);
        p.set_page(0, None);
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut p = Pager::with_page_size(10);
        p.record_total(45);
        assert_eq!(p.total_pages(), 5);

        p.record_total(50);
        assert_eq!(p.total_pages(), 5);

        p.record_total(51);
        assert_eq!(p.total_pages(), 6);
    }

    #[test]
    fn test_navigation_flags() {
        let mut p = Pager::with_page_size(10);
        p.record_total(45);

        p.set_page(1, None);
        assert!(p.has_next());
        assert!(!p.has_prev());

        p.set_page(3, None);
        assert!(p.has_next());
        assert!(p.has_prev());

        p.set_page(5, None);
        assert!(!p.has_next());
        assert!(p.is_last());
    }

    #[test]
    fn test_item_range() {
        let mut p = Pager::with_page_size(10);
        p.record_total(45);
        p.set_page(2, None);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        p.set_page(5, None);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_sync_page_size() {
        let mut p = Pager::with_page_size(10);
        p.record_total(45);
        p.sync_page_size(5);
        assert_eq!(p.page_size(), 5);
        assert_eq!(p.total_pages(), 9);
    }
}
