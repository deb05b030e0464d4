//! Page-number pagination math
//!
//! Feeds are sliced into fixed-size pages addressed by 1-based page
//! number. Out-of-range requests clamp to the nearest valid page instead
//! of erroring: below 1 returns the first page, past the end returns the
//! last. An empty result set still has exactly one (empty) page.

use serde::{Deserialize, Serialize};

/// Pagination calculator for a known total count and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_count: i64,
    page_size: i64,
}

impl Paginator {
    /// Create a paginator. Page size is forced to at least 1.
    pub fn new(total_count: i64, page_size: i64) -> Self {
        Self {
            total_count: total_count.max(0),
            page_size: page_size.max(1),
        }
    }

    /// Total number of items across all pages
    #[inline]
    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    /// Items per page
    #[inline]
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of pages, always at least 1
    pub fn total_pages(&self) -> i64 {
        if self.total_count == 0 {
            1
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        }
    }

    /// Clamp a requested page number into the valid range
    pub fn clamp_page(&self, requested: i64) -> i64 {
        requested.clamp(1, self.total_pages())
    }

    /// Row offset of the first item on the given (already clamped) page
    pub fn offset(&self, page: i64) -> i64 {
        (self.clamp_page(page) - 1) * self.page_size
    }
}

/// One page of an ordered feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping
    pub number: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

impl<T> Page<T> {
    /// Build a page from a fetched slice and its paginator
    pub fn new(items: Vec<T>, number: i64, paginator: &Paginator) -> Self {
        Self {
            items,
            number: paginator.clamp_page(number),
            total_pages: paginator.total_pages(),
            total_count: paginator.total_count(),
        }
    }

    /// An empty single-page result
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            number: 1,
            total_pages: 1,
            total_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Map page items while keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}
