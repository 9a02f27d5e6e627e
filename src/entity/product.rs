// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Product catalog entity.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{
    Decode, Encode, Postgres, Type,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
};

/// Product category, stored as text in the `category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Groceries.
    Food,

    /// Clothing and accessories.
    Fashion,

    /// Electronic devices.
    Electronic,
}

impl Category {
    /// Stored representation of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Fashion => "FASHION",
            Self::Electronic => "ELECTRONIC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored category value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown product category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOOD" => Ok(Self::Food),
            "FASHION" => Ok(Self::Fashion),
            "ELECTRONIC" => Ok(Self::Electronic),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

// Stored as plain text rather than a Postgres enum type, so the column
// needs no migration when variants are added. Encode/Decode delegate to
// the string impls.
impl Type<Postgres> for Category {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Category {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<'_, Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Category {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let s = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    /// Primary key, assigned by the database on insert.
    #[sqlx(rename = "prod_id")]
    pub id: i64,

    /// Product name, at most 30 characters.
    #[sqlx(rename = "prod_name")]
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i32,

    /// Product category.
    pub category: Category,

    /// Set by the database on insert, never updated afterwards.
    pub create_date: DateTime<Utc>,

    /// Bumped by the database on insert and on every update.
    pub update_date: DateTime<Utc>,
}

/// Column values for inserting a new product.
///
/// `id` and both timestamps are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertableProduct {
    /// Product name, at most 30 characters.
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i32,

    /// Product category.
    pub category: Category,
}
