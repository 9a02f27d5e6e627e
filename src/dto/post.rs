// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Post request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::PageInfo;
use crate::entity::{InsertablePost, PostWithTags};

/// Request DTO for creating a post with its hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Author name, 2 to 5 characters.
    #[validate(length(min = 2, max = 5))]
    pub writer: String,

    /// Title, 1 to 20 characters.
    #[validate(length(min = 1, max = 20))]
    pub title: String,

    /// Post body.
    #[serde(default)]
    pub content: String,

    /// Tag names to attach, in order.
    #[serde(default)]
    pub hash_tags: Vec<String>,
}

impl CreatePostRequest {
    /// Trim surrounding whitespace and drop empty tags.
    ///
    /// Run before `validate` so a whitespace-only writer or title fails the
    /// length rule instead of slipping through.
    pub fn normalized(mut self) -> Self {
        self.writer = self.writer.trim().to_owned();
        self.title = self.title.trim().to_owned();
        self.hash_tags = self
            .hash_tags
            .into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }
}

impl From<CreatePostRequest> for InsertablePost {
    fn from(dto: CreatePostRequest) -> Self {
        Self {
            writer: dto.writer,
            title: dto.title,
            content: dto.content,
        }
    }
}

/// Request DTO for modifying an existing post.
///
/// Only title and content can change; writer, id and creation date are
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// Id of the post to modify.
    #[validate(range(min = 1))]
    pub post_id: i64,

    /// New title, 1 to 20 characters.
    #[validate(length(min = 1, max = 20))]
    pub title: String,

    /// New post body.
    #[serde(default)]
    pub content: String,
}

impl UpdatePostRequest {
    /// Trim surrounding whitespace from the title.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self
    }
}

/// Response DTO for a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post id.
    pub id: i64,

    /// Author name.
    pub writer: String,

    /// Post title.
    pub title: String,

    /// Post body.
    pub content: String,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Tag names in insertion order.
    pub hash_tags: Vec<String>,
}

impl From<PostWithTags> for PostResponse {
    fn from(aggregate: PostWithTags) -> Self {
        let hash_tags = aggregate.tag_names();
        let post = aggregate.post;
        Self {
            id: post.id,
            writer: post.writer,
            title: post.title,
            content: post.content,
            create_date: post.create_date,
            hash_tags,
        }
    }
}

/// Response DTO for a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListResponse {
    /// Number of posts on this page, not the total.
    pub count: usize,

    /// Page metadata.
    pub page_info: PageInfo,

    /// Posts on this page.
    pub posts: Vec<PostResponse>,
}
