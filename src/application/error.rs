//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)       - Input validation failures
//! ├── Upstream(UpstreamError)   - start.gg call failures
//! └── EventNotFound(String)     - Slug resolved to no event
//! ```
//!
//! The REST layer owns the mapping from these variants to HTTP statuses.
//!
//! # Examples
//!
//! ```
//! use standings_relay::application::error::ApplicationError;
//!
//! let err = ApplicationError::event_not_found("tournament/nope");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::startgg::error::UpstreamError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input validation failure.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Failure of an upstream tournament API call.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// The slug resolved to no event.
    #[error("event not found: {0}")]
    EventNotFound(String),
}

impl ApplicationError {
    /// Creates an event not found error.
    #[must_use]
    pub fn event_not_found(slug: impl Into<String>) -> Self {
        Self::EventNotFound(slug.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_))
    }

    /// Returns true if this is an input validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_not_found() {
        let err = ApplicationError::event_not_found("tournament/nope");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("tournament/nope"));
    }

    #[test]
    fn from_domain_error() {
        let err: ApplicationError = DomainError::invalid_slug("empty").into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn from_upstream_error() {
        let err: ApplicationError = UpstreamError::timeout("slow").into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("upstream"));
    }
}
