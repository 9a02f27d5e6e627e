// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! Error type for the service layer.
//!
//! Not-found is a distinct kind so callers can tell a missing record from a
//! database failure, and validation failures carry the structured field
//! errors produced by `validator`.

use std::fmt;

use validator::ValidationErrors;

/// Error returned by service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// No post exists with the given id.
    PostNotFound(i64),

    /// No product exists with the given id.
    ProductNotFound(i64),

    /// Request DTO failed validation.
    Validation(ValidationErrors),

    /// A repository operation failed.
    Repository(sqlx::Error),
}

impl ServiceError {
    /// Check if this is a not-found error of either kind.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::ProductNotFound(_))
    }

    /// Check if this is a validation error.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "post {id} does not exist"),
            Self::ProductNotFound(id) => write!(f, "product {id} does not exist"),
            Self::Validation(errors) => write!(f, "validation failed: {errors}"),
            Self::Repository(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PostNotFound(_) | Self::ProductNotFound(_) => None,
            Self::Validation(errors) => Some(errors),
            Self::Repository(e) => Some(e),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Repository(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_not_found_display_carries_id() {
        let err = ServiceError::PostNotFound(42);
        assert_eq!(err.to_string(), "post 42 does not exist");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn product_not_found_display_carries_id() {
        let err = ServiceError::ProductNotFound(7);
        assert_eq!(err.to_string(), "product 7 does not exist");
        assert!(err.is_not_found());
    }

    #[test]
    fn repository_error_wraps_source() {
        use std::error::Error;

        let err = ServiceError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("repository error"));
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }

    #[test]
    fn validation_error_is_discriminable() {
        let err = ServiceError::from(ValidationErrors::new());
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }
}
