// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! One page of query results.
//!
//! Repositories return a [`Page`] from their `list` methods so callers get
//! the rows of the current page together with the total row count in a
//! single value. Services convert pages into response DTOs with
//! [`Page::map`].

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows on this page, in query order.
    pub items: Vec<T>,

    /// Total number of matching rows across all pages.
    pub total: i64,
}

impl<T> Page<T> {
    /// Create a page from its items and the total row count.
    pub const fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    /// An empty page with zero total.
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Number of items on this page (not the total).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item on the page, keeping the total.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagboard_core::Page;
    ///
    /// let page = Page::new(vec![1, 2, 3], 30);
    /// let doubled = page.map(|n| n * 2);
    /// assert_eq!(doubled.items, vec![2, 4, 6]);
    /// assert_eq!(doubled.total, 30);
    /// ```
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_new() {
        let page = Page::new(vec!["a", "b"], 12);
        assert_eq!(page.len(), 2);
        assert_eq!(page.total, 12);
        assert!(!page.is_empty());
    }

    #[test]
    fn page_empty() {
        let page: Page<i32> = Page::empty();
        assert_eq!(page.len(), 0);
        assert_eq!(page.total, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn page_default_is_empty() {
        let page: Page<String> = Page::default();
        assert!(page.is_empty());
    }

    #[test]
    fn page_map_keeps_total() {
        let page = Page::new(vec![1, 2, 3], 9);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, 9);
    }
}
