//! Pagination cursor.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A request to show a given page, as emitted by a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    /// Rows per page.
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }
}

/// Pagination descriptor supplied by the host in server pagination mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInput {
    /// Total number of rows known to the server.
    pub count: Option<usize>,
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    /// Start at page 1. A zero limit is raised to 1.
    pub fn new(limit: usize) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Move to the requested page. Page 0 and limit 0 are raised to 1.
    pub fn apply(&mut self, request: PageRequest) {
        self.page = request.page.max(1);
        self.limit = request.limit.max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
    }

    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.limit).max(1)
    }

    /// Index range of the current page within `total` rows.
    ///
    /// A page past the end yields an empty range.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.limit).min(total);
        let end = start.saturating_add(self.limit).min(total);
        start..end
    }
}
