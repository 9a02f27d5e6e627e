// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Product persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use tagboard_core::{Page, Pagination, Repository, SortDirection};

use crate::{
    dto::UpdateProductRequest,
    entity::{InsertableProduct, Product},
};

/// Repository trait for product persistence operations.
#[async_trait]
pub trait ProductRepository: Repository {
    /// Create a new product.
    async fn create(&self, product: InsertableProduct) -> Result<Product, Self::Error>;

    /// Find a product by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error>;

    /// Apply a partial update; absent fields keep their stored value.
    ///
    /// Bumps `update_date`, never `create_date` or `id`. Returns `None`
    /// when no product has the given id.
    async fn update(
        &self,
        id: i64,
        changes: UpdateProductRequest,
    ) -> Result<Option<Product>, Self::Error>;

    /// Delete a product by id. Returns `false` when no product has it.
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;

    /// List products ordered by id.
    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Product>, Self::Error>;
}

#[async_trait]
impl ProductRepository for PgPool {
    async fn create(&self, product: InsertableProduct) -> Result<Product, Self::Error> {
        sqlx::query_as(
            "INSERT INTO tbl_product (prod_name, price, category) VALUES ($1, $2, $3) \
             RETURNING prod_id, prod_name, price, category, create_date, update_date",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category)
        .fetch_one(self)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error> {
        sqlx::query_as(
            "SELECT prod_id, prod_name, price, category, create_date, update_date \
             FROM tbl_product WHERE prod_id = $1",
        )
        .bind(id)
        .fetch_optional(self)
        .await
    }

    async fn update(
        &self,
        id: i64,
        changes: UpdateProductRequest,
    ) -> Result<Option<Product>, Self::Error> {
        sqlx::query_as(
            "UPDATE tbl_product SET \
                 prod_name = COALESCE($2, prod_name), \
                 price = COALESCE($3, price), \
                 category = COALESCE($4, category), \
                 update_date = now() \
             WHERE prod_id = $1 \
             RETURNING prod_id, prod_name, price, category, create_date, update_date",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.category)
        .fetch_optional(self)
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM tbl_product WHERE prod_id = $1")
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        pagination: Pagination,
        sort: SortDirection,
    ) -> Result<Page<Product>, Self::Error> {
        let sql = format!(
            "SELECT prod_id, prod_name, price, category, create_date, update_date \
             FROM tbl_product ORDER BY prod_id {} LIMIT $1 OFFSET $2",
            sort.as_sql(),
        );
        let items = sqlx::query_as::<_, Product>(&sql)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(self)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tbl_product")
            .fetch_one(self)
            .await?;

        Ok(Page::new(items, total))
    }
}
