// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Post persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use tagboard_core::{Page, Pagination, Repository, SortDirection};

use crate::entity::{HashTag, InsertablePost, Post, PostWithTags};

/// Repository trait for post persistence operations.
#[async_trait]
pub trait PostRepository: Repository {
    /// Create a post and all of its hashtags in one transaction.
    ///
    /// Returns the fully populated aggregate, so callers never see a post
    /// whose in-memory tags differ from the stored ones. If any tag insert
    /// fails the post is rolled back with it.
    async fn create(
        &self,
        post: InsertablePost,
        tags: &[String],
    ) -> Result<PostWithTags, Self::Error>;

    /// Find a post and its hashtags by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithTags>, Self::Error>;

    /// Overwrite title and content of an existing post.
    ///
    /// Returns `None` when no post has the given id. Writer, creation date
    /// and hashtags are untouched.
    async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<PostWithTags>, Self::Error>;

    /// Delete a post and its hashtags in one transaction.
    ///
    /// Returns `false` when no post has the given id.
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;

    /// List posts ordered by creation date.
    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Post>, Self::Error>;
}

#[async_trait]
impl PostRepository for PgPool {
    async fn create(
        &self,
        post: InsertablePost,
        tags: &[String],
    ) -> Result<PostWithTags, Self::Error> {
        let mut tx = self.begin().await?;

        let saved: Post = sqlx::query_as(
            "INSERT INTO tbl_post (writer, title, content) VALUES ($1, $2, $3) \
             RETURNING id, writer, title, content, create_date",
        )
        .bind(&post.writer)
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(&mut *tx)
        .await?;

        let mut hash_tags = Vec::with_capacity(tags.len());
        for tag_name in tags {
            let tag: HashTag = sqlx::query_as(
                "INSERT INTO tbl_hash_tag (tag_name, post_id) VALUES ($1, $2) \
                 RETURNING id, tag_name, post_id",
            )
            .bind(tag_name)
            .bind(saved.id)
            .fetch_one(&mut *tx)
            .await?;
            hash_tags.push(tag);
        }

        tx.commit().await?;

        Ok(PostWithTags {
            post: saved,
            hash_tags,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithTags>, Self::Error> {
        let Some(post) = sqlx::query_as::<_, Post>(
            "SELECT id, writer, title, content, create_date FROM tbl_post WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self)
        .await?
        else {
            return Ok(None);
        };

        let hash_tags = sqlx::query_as::<_, HashTag>(
            "SELECT id, tag_name, post_id FROM tbl_hash_tag WHERE post_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(self)
        .await?;

        Ok(Some(PostWithTags { post, hash_tags }))
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<PostWithTags>, Self::Error> {
        let Some(post) = sqlx::query_as::<_, Post>(
            "UPDATE tbl_post SET title = $2, content = $3 WHERE id = $1 \
             RETURNING id, writer, title, content, create_date",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(self)
        .await?
        else {
            return Ok(None);
        };

        let hash_tags = sqlx::query_as::<_, HashTag>(
            "SELECT id, tag_name, post_id FROM tbl_hash_tag WHERE post_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(self)
        .await?;

        Ok(Some(PostWithTags { post, hash_tags }))
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let mut tx = self.begin().await?;

        // Hashtags own the relationship; remove them first so no orphaned
        // rows survive the post.
        sqlx::query("DELETE FROM tbl_hash_tag WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM tbl_post WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Post>, Self::Error> {
        let sql = format!(
            "SELECT id, writer, title, content, create_date FROM tbl_post \
             ORDER BY create_date {}, id {} LIMIT $1 OFFSET $2",
            sort.as_sql(),
            sort.as_sql(),
        );
        let items = sqlx::query_as::<_, Post>(&sql)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(self)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tbl_post")
            .fetch_one(self)
            .await?;

        Ok(Page::new(items, total))
    }
}
