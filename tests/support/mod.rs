// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! In-memory repositories backing the service tests.
//!
//! `MemBoard` implements every repository trait over one shared store and
//! mirrors the Postgres semantics: ids count up from 1, timestamps are a
//! strictly increasing clock, post and tags change together.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tagboard::{
    dto::UpdateProductRequest,
    entity::{HashTag, InsertablePost, InsertableProduct, Post, PostWithTags, Product},
    repository::{HashTagRepository, PostRepository, ProductRepository},
};
use tagboard_core::{Page, Pagination, Repository, SortDirection};

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    tags: Vec<HashTag>,
    products: Vec<Product>,
    next_post_id: i64,
    next_tag_id: i64,
    next_product_id: i64,
    tick: i64,
}

impl Store {
    // Deterministic clock so creation-date ordering never ties.
    fn now(&mut self) -> DateTime<Utc> {
        self.tick += 1;
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(self.tick)
    }

    fn tags_of(&self, post_id: i64) -> Vec<HashTag> {
        let mut tags: Vec<HashTag> = self
            .tags
            .iter()
            .filter(|tag| tag.post_id == post_id)
            .cloned()
            .collect();
        tags.sort_by_key(|tag| tag.id);
        tags
    }
}

/// Shared in-memory board implementing all repository traits.
#[derive(Clone, Default)]
pub struct MemBoard(Arc<Mutex<Store>>);

impl Repository for MemBoard {
    type Error = sqlx::Error;
    type Pool = ();

    fn pool(&self) -> &Self::Pool {
        &()
    }
}

#[async_trait]
impl PostRepository for MemBoard {
    async fn create(
        &self,
        post: InsertablePost,
        tags: &[String],
    ) -> Result<PostWithTags, Self::Error> {
        let mut store = self.0.lock().unwrap();

        store.next_post_id += 1;
        let create_date = store.now();
        let saved = Post {
            id: store.next_post_id,
            writer: post.writer,
            title: post.title,
            content: post.content,
            create_date,
        };
        store.posts.push(saved.clone());

        let mut hash_tags = Vec::with_capacity(tags.len());
        for tag_name in tags {
            store.next_tag_id += 1;
            let tag = HashTag {
                id: store.next_tag_id,
                tag_name: tag_name.clone(),
                post_id: saved.id,
            };
            store.tags.push(tag.clone());
            hash_tags.push(tag);
        }

        Ok(PostWithTags {
            post: saved,
            hash_tags,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithTags>, Self::Error> {
        let store = self.0.lock().unwrap();
        Ok(store.posts.iter().find(|post| post.id == id).map(|post| {
            PostWithTags {
                post: post.clone(),
                hash_tags: store.tags_of(id),
            }
        }))
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<PostWithTags>, Self::Error> {
        let mut store = self.0.lock().unwrap();
        let Some(index) = store.posts.iter().position(|post| post.id == id) else {
            return Ok(None);
        };

        store.posts[index].title = title.to_owned();
        store.posts[index].content = content.to_owned();

        Ok(Some(PostWithTags {
            post: store.posts[index].clone(),
            hash_tags: store.tags_of(id),
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let mut store = self.0.lock().unwrap();
        let existed = store.posts.iter().any(|post| post.id == id);
        store.tags.retain(|tag| tag.post_id != id);
        store.posts.retain(|post| post.id != id);
        Ok(existed)
    }

    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Post>, Self::Error> {
        let store = self.0.lock().unwrap();
        let mut posts = store.posts.clone();
        posts.sort_by_key(|post| (post.create_date, post.id));
        if sort == SortDirection::Desc {
            posts.reverse();
        }

        let total = posts.len() as i64;
        let items = posts
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect();
        Ok(Page::new(items, total))
    }
}

#[async_trait]
impl HashTagRepository for MemBoard {
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<HashTag>, Self::Error> {
        Ok(self.0.lock().unwrap().tags_of(post_id))
    }

    async fn find_by_posts(&self, post_ids: &[i64]) -> Result<Vec<HashTag>, Self::Error> {
        let store = self.0.lock().unwrap();
        let mut tags: Vec<HashTag> = store
            .tags
            .iter()
            .filter(|tag| post_ids.contains(&tag.post_id))
            .cloned()
            .collect();
        tags.sort_by_key(|tag| tag.id);
        Ok(tags)
    }
}

#[async_trait]
impl ProductRepository for MemBoard {
    async fn create(&self, product: InsertableProduct) -> Result<Product, Self::Error> {
        let mut store = self.0.lock().unwrap();

        store.next_product_id += 1;
        let now = store.now();
        let saved = Product {
            id: store.next_product_id,
            name: product.name,
            price: product.price,
            category: product.category,
            create_date: now,
            update_date: now,
        };
        store.products.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error> {
        let store = self.0.lock().unwrap();
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        changes: UpdateProductRequest,
    ) -> Result<Option<Product>, Self::Error> {
        let mut store = self.0.lock().unwrap();
        let now = store.now();
        let Some(product) = store.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        product.update_date = now;

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let mut store = self.0.lock().unwrap();
        let existed = store.products.iter().any(|p| p.id == id);
        store.products.retain(|p| p.id != id);
        Ok(existed)
    }

    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Product>, Self::Error> {
        let store = self.0.lock().unwrap();
        let mut products = store.products.clone();
        products.sort_by_key(|p| p.id);
        if sort == SortDirection::Desc {
            products.reverse();
        }

        let total = products.len() as i64;
        let items = products
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect();
        Ok(Page::new(items, total))
    }
}
