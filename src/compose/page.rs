//! Pagination arithmetic.

use serde::{Deserialize, Serialize};

/// A 1-based page request. Values below 1 are clamped up to 1 wherever the
/// request is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, page_size: 10 }
    }
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }.clamped()
    }

    /// Both fields raised to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.max(1),
        }
    }

    /// Rows skipped before this page: `(page - 1) * page_size`.
    pub fn offset(self) -> u64 {
        let clamped = self.clamped();
        (clamped.page - 1) * clamped.page_size
    }
}

/// Derived metadata for one page over a known total row count.
///
/// Pure arithmetic over the composer's outputs; running the count query and
/// supplying `total_records` is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    pub fn new(request: PageRequest, total_records: u64) -> Self {
        let request = request.clamped();
        let total_pages = total_records.div_ceil(request.page_size);
        Self {
            page: request.page,
            page_size: request.page_size,
            total_records,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }
}
