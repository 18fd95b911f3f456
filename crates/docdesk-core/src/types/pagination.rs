//! Pagination types for the document table.
//!
//! Pages are 0-based. Paging is always done client-side over a fully
//! materialized list.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page size choices offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];

/// A page position over a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    #[serde(default)]
    pub page: usize,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl PageRequest {
    /// Create a new page request. A zero page size is bumped to one.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Number of items on a full page.
    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// Slice `items` down to this page. Pages past the end are empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Return this request with `page` pulled back to the last page that
    /// exists for `total_items`.
    pub fn clamped(self, total_items: usize) -> Self {
        let last = total_pages(total_items, self.page_size) - 1;
        Self {
            page: self.page.min(last),
            ..self
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total_items`. Never less than one, so an
/// empty list still has a (blank) first page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (0-based).
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page + 1 < total_pages,
            has_previous: page > 0,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
