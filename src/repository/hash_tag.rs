// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Hashtag persistence.
//!
//! Hashtag rows are written through [`crate::repository::PostRepository`]
//! so post and tags always change in one transaction; this trait only
//! reads them back.

use async_trait::async_trait;
use sqlx::PgPool;
use tagboard_core::Repository;

use crate::entity::HashTag;

/// Repository trait for hashtag reads.
#[async_trait]
pub trait HashTagRepository: Repository {
    /// Hashtags of one post, in insertion order.
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<HashTag>, Self::Error>;

    /// Hashtags of several posts at once, for decorating a listing page
    /// without a query per post.
    async fn find_by_posts(&self, post_ids: &[i64]) -> Result<Vec<HashTag>, Self::Error>;
}

#[async_trait]
impl HashTagRepository for PgPool {
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<HashTag>, Self::Error> {
        sqlx::query_as(
            "SELECT id, tag_name, post_id FROM tbl_hash_tag WHERE post_id = $1 ORDER BY id",
        )
        .bind(post_id)
        .fetch_all(self)
        .await
    }

    async fn find_by_posts(&self, post_ids: &[i64]) -> Result<Vec<HashTag>, Self::Error> {
        sqlx::query_as(
            "SELECT id, tag_name, post_id FROM tbl_hash_tag WHERE post_id = ANY($1) ORDER BY id",
        )
        .bind(post_ids)
        .fetch_all(self)
        .await
    }
}
