// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Persisted records with identity.
//!
//! Entities map 1:1 to database rows. Conversion to and from the DTO
//! shapes used at the service boundary lives in [`crate::dto`].

mod post;
mod product;

pub use post::{HashTag, InsertablePost, Post, PostWithTags};
pub use product::{Category, InsertableProduct, ParseCategoryError, Product};
