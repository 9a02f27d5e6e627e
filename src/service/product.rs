// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Product catalog service.

use tagboard_core::SortDirection;
use tracing::info;
use validator::Validate;

use crate::{
    dto::{CreateProductRequest, PageRequest, ProductResponse, UpdateProductRequest},
    error::ServiceError,
    repository::ProductRepository,
};

/// Orchestrates product catalog operations.
pub struct ProductService<R> {
    products: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
    ServiceError: From<R::Error>,
{
    /// Create a service over the given repository.
    pub const fn new(products: R) -> Self {
        Self { products }
    }

    /// Create a new product.
    pub async fn create(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let request = request.normalized();
        request.validate()?;

        let created = self.products.create(request.into()).await?;
        info!(id = created.id, "created product");

        Ok(created.into())
    }

    /// Fetch one product.
    pub async fn get(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))?;
        Ok(product.into())
    }

    /// Apply a partial update.
    ///
    /// An empty request changes nothing and leaves `update_date` alone.
    pub async fn modify(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let request = request.normalized();
        request.validate()?;

        if request.is_noop() {
            return self.get(id).await;
        }

        let updated = self
            .products
            .update(id, request)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))?;
        info!(id, "modified product");

        Ok(updated.into())
    }

    /// Delete a product.
    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        if !self.products.delete(id).await? {
            return Err(ServiceError::ProductNotFound(id));
        }
        info!(id, "deleted product");
        Ok(())
    }

    /// List products, newest id first.
    pub async fn list(&self, request: PageRequest) -> Result<Vec<ProductResponse>, ServiceError> {
        request.validate()?;

        let page = self
            .products
            .list(request.pagination(), SortDirection::Desc)
            .await?;
        Ok(page.map(ProductResponse::from).items)
    }
}
