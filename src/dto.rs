// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Request and response shapes used at the service boundary.
//!
//! Request DTOs derive `validator::Validate`; services normalize and
//! validate them before touching a repository. Response DTOs are plain
//! serializable data, converted from entities via `From`.

mod page;
mod post;
mod product;

pub use page::{PAGE_WINDOW, PageInfo, PageRequest};
pub use post::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};
pub use product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
