// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Service layer.
//!
//! Services normalize and validate request DTOs, call repositories, and
//! convert entities into response DTOs. They are generic over the
//! repository traits; wire them to `sqlx::PgPool` in production and to
//! in-memory repositories in tests.

mod post;
mod product;

pub use post::PostService;
pub use product::ProductService;
