// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Persistence abstraction.
//!
//! Each repository is an async trait extending
//! [`tagboard_core::Repository`], with an implementation for
//! [`sqlx::PgPool`]. Services stay generic over these traits, so tests run
//! against in-memory implementations.

mod hash_tag;
mod post;
mod product;

pub use hash_tag::HashTagRepository;
pub use post::PostRepository;
pub use product::ProductRepository;
