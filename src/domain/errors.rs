//! # Domain Errors
//!
//! Validation errors raised when constructing domain value objects.
//!
//! # Examples
//!
//! ```
//! use standings_relay::domain::DomainError;
//!
//! let err = DomainError::invalid_slug("slug must not be empty");
//! assert!(err.to_string().contains("invalid event slug"));
//! ```

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The event slug is empty or whitespace-only.
    #[error("invalid event slug: {0}")]
    InvalidSlug(String),

    /// Pagination parameters are out of range.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
}

impl DomainError {
    /// Creates an invalid slug error.
    #[must_use]
    pub fn invalid_slug(message: impl Into<String>) -> Self {
        Self::InvalidSlug(message.into())
    }

    /// Creates an invalid pagination error.
    #[must_use]
    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_slug_display() {
        let err = DomainError::invalid_slug("must not be empty");
        assert!(err.to_string().contains("invalid event slug"));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn invalid_pagination_display() {
        let err = DomainError::invalid_pagination("page must be at least 1");
        assert!(err.to_string().contains("invalid pagination"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            DomainError::invalid_slug("x"),
            DomainError::InvalidSlug("x".to_string())
        );
        assert_ne!(
            DomainError::invalid_slug("x"),
            DomainError::invalid_pagination("x")
        );
    }
}
