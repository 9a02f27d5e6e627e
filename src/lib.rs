// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! # tagboard
//!
//! A small blog-post board with hashtags, plus a product catalog.
//!
//! The crate is layered the usual way: [`entity`] holds the persisted
//! records, [`dto`] the validated request/response shapes, [`repository`]
//! the async persistence traits with their `sqlx::PgPool` implementations,
//! and [`service`] the orchestration in between. Pagination and sorting
//! primitives come from `tagboard-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagboard::{
//!     config::DatabaseConfig,
//!     dto::{CreatePostRequest, PageRequest},
//!     service::PostService,
//! };
//!
//! let pool = DatabaseConfig::from_env().connect().await?;
//! let service = PostService::new(pool.clone(), pool);
//!
//! let created = service
//!     .create(CreatePostRequest {
//!         writer: "haru".into(),
//!         title: "hello".into(),
//!         content: "first post".into(),
//!         hash_tags: vec!["rust".into()],
//!     })
//!     .await?;
//!
//! let listing = service.get_posts(PageRequest::default()).await?;
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod repository;
pub mod service;

pub use error::ServiceError;
pub use tagboard_core::{Page, Pagination, Repository, SortDirection};
