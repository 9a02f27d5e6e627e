// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tagboard_core::prelude::*;
//! ```

pub use crate::{Page, Pagination, Repository, SortDirection};
