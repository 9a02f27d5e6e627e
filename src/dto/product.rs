// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Product request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{Category, InsertableProduct, Product};

/// Request DTO for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product name, 1 to 30 characters.
    #[validate(length(min = 1, max = 30))]
    pub name: String,

    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price: i32,

    /// Product category.
    pub category: Category,
}

impl CreateProductRequest {
    /// Trim surrounding whitespace from the name.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self
    }
}

impl From<CreateProductRequest> for InsertableProduct {
    fn from(dto: CreateProductRequest) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            category: dto.category,
        }
    }
}

/// Request DTO for partially updating a product.
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    /// New product name, 1 to 30 characters.
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,

    /// New price.
    pub price: Option<i32>,

    /// New category.
    pub category: Option<Category>,
}

impl UpdateProductRequest {
    /// Trim surrounding whitespace from the name, if present.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|name| name.trim().to_owned());
        self
    }

    /// Whether the request changes anything at all.
    pub const fn is_noop(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none()
    }
}

/// Response DTO for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Product id.
    pub id: i64,

    /// Product name.
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i32,

    /// Product category.
    pub category: Category,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
            create_date: product.create_date,
            update_date: product.update_date,
        }
    }
}
