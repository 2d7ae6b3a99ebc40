//! # Upstream Errors
//!
//! Error types for start.gg API calls.
//!
//! # Examples
//!
//! ```
//! use standings_relay::infrastructure::startgg::error::UpstreamError;
//!
//! let error = UpstreamError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = UpstreamError::authentication("invalid API key");
//! assert!(error.is_auth());
//! ```

use thiserror::Error;

/// Error type for upstream tournament API operations.
///
/// Covers transport failures, HTTP status failures, and GraphQL-level
/// failures (an `errors` array or a missing `data` field in an otherwise
/// successful response).
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Request timed out.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("upstream connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure (401/403).
    #[error("upstream authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded (429).
    #[error("upstream rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// Upstream server failure (5xx).
    #[error("upstream server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("upstream http error ({status}): {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// The GraphQL response carried errors.
    #[error("graphql errors: {}", messages.join("; "))]
    Graphql {
        /// Error messages from the GraphQL `errors` array.
        messages: Vec<String>,
    },

    /// The GraphQL envelope had neither data nor errors.
    #[error("graphql response missing data")]
    MissingData,

    /// Response body could not be parsed.
    #[error("upstream parse error: {message}")]
    Parse {
        /// Error message.
        message: String,
    },

    /// Internal adapter error (e.g. client construction failed).
    #[error("upstream internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl UpstreamError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a GraphQL errors error.
    #[must_use]
    pub fn graphql(messages: Vec<String>) -> Self {
        Self::Graphql { messages }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and could succeed on retry.
    ///
    /// The relay performs no retries; callers use this for logging severity.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Connection { .. }
                | Self::RateLimited { .. }
                | Self::Server { .. }
        )
    }

    /// Returns true if this error indicates a bad or missing API key.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = UpstreamError::timeout("test");
        assert!(error.is_retryable());
        assert!(!error.is_auth());
    }

    #[test]
    fn connection_is_retryable() {
        assert!(UpstreamError::connection("refused").is_retryable());
    }

    #[test]
    fn rate_limited_is_retryable() {
        assert!(UpstreamError::rate_limited("slow down").is_retryable());
    }

    #[test]
    fn server_error_is_retryable() {
        assert!(UpstreamError::server(502, "bad gateway").is_retryable());
    }

    #[test]
    fn authentication_is_not_retryable() {
        let error = UpstreamError::authentication("bad key");
        assert!(!error.is_retryable());
        assert!(error.is_auth());
    }

    #[test]
    fn graphql_error_joins_messages() {
        let error = UpstreamError::graphql(vec!["a".to_string(), "b".to_string()]);
        let display = error.to_string();
        assert!(display.contains("a; b"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn display_carries_status() {
        let error = UpstreamError::http(418, "teapot");
        assert!(error.to_string().contains("418"));
    }
}
