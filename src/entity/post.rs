// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Post and hashtag entities.
//!
//! `Post` and `HashTag` live in separate tables linked by
//! `HashTag::post_id`. Repositories never hand out a post whose in-memory
//! tag list disagrees with the database: reads and writes that involve tags
//! return the [`PostWithTags`] aggregate assembled inside one transaction.

use chrono::{DateTime, Utc};

/// A board post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    /// Primary key, assigned by the database on insert.
    pub id: i64,

    /// Display name of the author.
    pub writer: String,

    /// Post title.
    pub title: String,

    /// Post body.
    pub content: String,

    /// Set by the database on insert, never updated afterwards.
    pub create_date: DateTime<Utc>,
}

/// A hashtag attached to a post.
///
/// The hashtag row owns the relationship: it carries the foreign key and
/// must reference exactly one existing post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct HashTag {
    /// Primary key, assigned by the database on insert.
    pub id: i64,

    /// Tag text, without any `#` prefix.
    pub tag_name: String,

    /// Owning post.
    pub post_id: i64,
}

/// A post together with all of its hashtags, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithTags {
    /// The post row.
    pub post: Post,

    /// Hashtag rows referencing the post, ordered by id.
    pub hash_tags: Vec<HashTag>,
}

impl PostWithTags {
    /// Tag names in insertion order.
    pub fn tag_names(&self) -> Vec<String> {
        self.hash_tags.iter().map(|t| t.tag_name.clone()).collect()
    }
}

/// Column values for inserting a new post.
///
/// `id` and `create_date` are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertablePost {
    /// Display name of the author.
    pub writer: String,

    /// Post title.
    pub title: String,

    /// Post body.
    pub content: String,
}
