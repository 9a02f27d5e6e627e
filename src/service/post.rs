// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Post service: list, detail, create, modify, delete.

use std::collections::HashMap;

use tagboard_core::SortDirection;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    dto::{CreatePostRequest, PageInfo, PageRequest, PostListResponse, PostResponse,
        UpdatePostRequest},
    entity::{HashTag, PostWithTags},
    error::ServiceError,
    repository::{HashTagRepository, PostRepository},
};

/// Orchestrates post operations against the post and hashtag repositories.
pub struct PostService<P, H> {
    posts: P,
    tags: H,
}

impl<P, H> PostService<P, H>
where
    P: PostRepository,
    H: HashTagRepository,
    ServiceError: From<P::Error> + From<H::Error>,
{
    /// Create a service over the given repositories.
    pub const fn new(posts: P, tags: H) -> Self {
        Self { posts, tags }
    }

    /// List posts, newest first.
    ///
    /// `count` in the response is the number of items on this page, not
    /// the total; the total lives in the page metadata.
    pub async fn get_posts(&self, request: PageRequest) -> Result<PostListResponse, ServiceError> {
        request.validate()?;

        let page = self
            .posts
            .list(request.pagination(), SortDirection::Desc)
            .await?;
        let total = page.total;
        debug!(page = request.page, size = request.size, total, "listing posts");

        let ids: Vec<i64> = page.items.iter().map(|post| post.id).collect();
        let mut tags_by_post: HashMap<i64, Vec<HashTag>> = HashMap::new();
        for tag in self.tags.find_by_posts(&ids).await? {
            tags_by_post.entry(tag.post_id).or_default().push(tag);
        }

        let posts: Vec<PostResponse> = page
            .items
            .into_iter()
            .map(|post| {
                let hash_tags = tags_by_post.remove(&post.id).unwrap_or_default();
                PostResponse::from(PostWithTags { post, hash_tags })
            })
            .collect();

        Ok(PostListResponse {
            count: posts.len(),
            page_info: PageInfo::new(request.page, request.size, total),
            posts,
        })
    }

    /// Fetch one post with its hashtags.
    pub async fn get_detail(&self, id: i64) -> Result<PostResponse, ServiceError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::PostNotFound(id))?;
        Ok(post.into())
    }

    /// Create a post together with its hashtags.
    ///
    /// One repository call runs the whole transaction and hands back the
    /// populated aggregate, so the response always reflects exactly what
    /// was stored.
    pub async fn create(&self, request: CreatePostRequest) -> Result<PostResponse, ServiceError> {
        let request = request.normalized();
        request.validate()?;

        let tags = request.hash_tags.clone();
        let created = self.posts.create(request.into(), &tags).await?;
        info!(id = created.post.id, tags = tags.len(), "created post");

        Ok(created.into())
    }

    /// Overwrite title and content of an existing post.
    ///
    /// Id and creation date never change. Last writer wins.
    pub async fn modify(&self, request: UpdatePostRequest) -> Result<PostResponse, ServiceError> {
        let request = request.normalized();
        request.validate()?;

        let updated = self
            .posts
            .update(request.post_id, &request.title, &request.content)
            .await?
            .ok_or(ServiceError::PostNotFound(request.post_id))?;
        info!(id = request.post_id, "modified post");

        Ok(updated.into())
    }

    /// Delete a post; its hashtags go with it.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.posts.delete(id).await? {
            return Err(ServiceError::PostNotFound(id));
        }
        info!(id, "deleted post");
        Ok(())
    }
}
