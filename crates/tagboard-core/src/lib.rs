// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Persistence primitives shared by every tagboard repository.
//!
//! # Overview
//!
//! - [`Repository`] — Base trait all repository traits extend
//! - [`Pagination`] — Limit/offset parameters for list operations
//! - [`SortDirection`] — Ordering for list queries
//! - [`Page`] — One page of results together with the total row count
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use tagboard_core::prelude::*;
//!
//! // Pages are 0-indexed here; callers mapping from 1-indexed input
//! // subtract one before calling.
//! let second_page = Pagination::page(1, 10);
//! assert_eq!(second_page.offset, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod page;
pub mod prelude;

pub use page::Page;

/// Base repository trait.
///
/// Every domain repository trait extends this one, so each backend declares
/// its error and pool types exactly once.
///
/// # Associated Types
///
/// - `Error` — Error type for repository operations
/// - `Pool` — Underlying database pool type
///
/// # Example
///
/// Domain traits follow this pattern:
///
/// ```rust,ignore
/// #[async_trait]
/// pub trait PostRepository: Repository {
///     async fn find_by_id(&self, id: i64) -> Result<Option<Post>, Self::Error>;
///     // ...
/// }
/// ```
pub trait Repository: Send + Sync {
    /// Error type for repository operations.
    ///
    /// Must implement `std::error::Error + Send + Sync` for async
    /// compatibility.
    type Error: std::error::Error + Send + Sync;

    /// Underlying database pool type.
    ///
    /// Enables access to the pool for transactions and custom queries.
    type Pool;

    /// Get reference to the underlying database pool.
    fn pool(&self) -> &Self::Pool;
}

/// Pagination parameters for list operations.
///
/// Repositories consume `limit`/`offset` directly; use [`Pagination::page`]
/// to convert from a 0-indexed page number.
///
/// # Example
///
/// ```rust
/// use tagboard_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64,
}

impl Pagination {
    /// Create new pagination parameters.
    ///
    /// # Arguments
    ///
    /// * `limit` — Maximum results to return
    /// * `offset` — Number of results to skip
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Create pagination for a specific page.
    ///
    /// # Arguments
    ///
    /// * `page` — Page number (0-indexed)
    /// * `per_page` — Items per page
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagboard_core::Pagination;
    ///
    /// let page_0 = Pagination::page(0, 10); // offset=0, limit=10
    /// let page_2 = Pagination::page(2, 10); // offset=20, limit=10
    /// ```
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit: per_page,
            offset: page * per_page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

// sqlx implementation
#[cfg(feature = "postgres")]
mod postgres_impl {
    use sqlx::PgPool;

    use super::Repository;

    impl Repository for PgPool {
        type Error = sqlx::Error;
        type Pool = PgPool;

        fn pool(&self) -> &Self::Pool {
            self
        }
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_new() {
        let p = Pagination::new(50, 100);
        assert_eq!(p.limit, 50);
        assert_eq!(p.offset, 100);
    }

    #[test]
    fn pagination_page() {
        let p = Pagination::page(2, 25);
        assert_eq!(p.limit, 25);
        assert_eq!(p.offset, 50);
    }

    #[test]
    fn pagination_first_page_has_no_offset() {
        let p = Pagination::page(0, 10);
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn pagination_default() {
        let p = Pagination::default();
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn sort_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }

    #[test]
    fn sort_direction_default() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }
}
