//! Paging request and result types.

use serde::{Deserialize, Serialize};

/// One-based page request.
///
/// Values are accepted as given, including zero and negative numbers. The
/// store boundary interprets them through [`PageRequest::offset`] and
/// [`PageRequest::limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
}

impl PageRequest {
    /// Page number used when the caller does not supply one.
    pub const DEFAULT_PAGE_NUMBER: i64 = 1;
    /// Page size used when the caller does not supply one.
    pub const DEFAULT_PAGE_SIZE: i64 = 10;

    /// Creates a page request.
    #[must_use]
    pub const fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Returns the requested one-based page number.
    #[must_use]
    pub const fn page_number(self) -> i64 {
        self.page_number
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn page_size(self) -> i64 {
        self.page_size
    }

    /// Number of leading items to skip: `(page_number - 1) * page_size`,
    /// saturating, and never below zero.
    #[must_use]
    pub const fn offset(self) -> i64 {
        let skipped = self
            .page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size);
        if skipped < 0 { 0 } else { skipped }
    }

    /// Maximum number of items to return. Non-positive sizes yield zero.
    #[must_use]
    pub const fn limit(self) -> i64 {
        if self.page_size < 0 { 0 } else { self.page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_NUMBER, Self::DEFAULT_PAGE_SIZE)
    }
}

/// A page of items together with the total number of items available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in board order.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Projects every item on the page, keeping the total count.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
