// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Pagination request and page metadata.

use serde::{Deserialize, Serialize};
use tagboard_core::Pagination;
use validator::Validate;

/// Number of page links shown per navigation block.
pub const PAGE_WINDOW: i64 = 10;

/// Caller-facing pagination parameters, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PageRequest {
    /// Requested page, starting at 1.
    #[validate(range(min = 1))]
    pub page: i64,

    /// Items per page.
    #[validate(range(min = 1, max = 100))]
    pub size: i64,
}

impl PageRequest {
    /// Convert to the 0-indexed limit/offset form repositories consume.
    pub const fn pagination(&self) -> Pagination {
        Pagination::page(self.page - 1, self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

/// Page metadata bundled into list responses.
///
/// Besides the raw counts this carries a navigation window of
/// [`PAGE_WINDOW`] pages: `begin_page..=end_page` are the page links to
/// render, `prev`/`next` say whether a neighbouring window exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page, 1-indexed.
    pub page: i64,

    /// Items per page.
    pub size: i64,

    /// Total number of matching rows.
    pub total_count: i64,

    /// Total number of pages, at least 1.
    pub total_pages: i64,

    /// First page of the current navigation window.
    pub begin_page: i64,

    /// Last page of the current navigation window.
    pub end_page: i64,

    /// Whether a window exists before `begin_page`.
    pub prev: bool,

    /// Whether a window exists after `end_page`.
    pub next: bool,
}

impl PageInfo {
    /// Compute page metadata from the current request and the total count.
    pub fn new(page: i64, size: i64, total_count: i64) -> Self {
        // Ceiling division; both divisors are validated >= 1 upstream.
        let total_pages = ((total_count + size - 1) / size).max(1);
        let window_end = ((page + PAGE_WINDOW - 1) / PAGE_WINDOW) * PAGE_WINDOW;
        let begin_page = window_end - PAGE_WINDOW + 1;
        let end_page = window_end.min(total_pages);

        Self {
            page,
            size,
            total_count,
            total_pages,
            begin_page,
            end_page,
            prev: begin_page > 1,
            next: window_end < total_pages,
        }
    }
}
