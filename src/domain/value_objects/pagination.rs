//! # Pagination Value Object
//!
//! Page / per-page pair forwarded verbatim to the upstream standings query.
//!
//! The relay performs no cursor management; it only checks that both values
//! are at least 1 before passing them through.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Default page when the client omits one.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when the client omits one.
pub const DEFAULT_PER_PAGE: u32 = 8;

/// A validated standings page request.
///
/// # Invariants
///
/// - `page >= 1`
/// - `per_page >= 1`
///
/// # Examples
///
/// ```
/// use standings_relay::domain::value_objects::PageRequest;
///
/// let page = PageRequest::new(2, 16)?;
/// assert_eq!(page.page(), 2);
/// assert_eq!(page.per_page(), 16);
///
/// let default = PageRequest::default();
/// assert_eq!((default.page(), default.per_page()), (1, 8));
/// # Ok::<(), standings_relay::domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Creates a new page request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPagination`] if either value is zero.
    pub fn new(page: u32, per_page: u32) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::invalid_pagination("page must be at least 1"));
        }
        if per_page < 1 {
            return Err(DomainError::invalid_pagination(
                "perPage must be at least 1",
            ));
        }
        Ok(Self { page, per_page })
    }

    /// Returns the 1-based page number.
    #[inline]
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[inline]
    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_page_request() {
        let page = PageRequest::new(3, 8).unwrap();
        assert_eq!(page.page(), 3);
        assert_eq!(page.per_page(), 8);
    }

    #[test]
    fn zero_page_rejected() {
        assert!(PageRequest::new(0, 8).is_err());
    }

    #[test]
    fn zero_per_page_rejected() {
        assert!(PageRequest::new(1, 0).is_err());
    }

    #[test]
    fn defaults_match_original_relay() {
        let page = PageRequest::default();
        assert_eq!(page.page(), DEFAULT_PAGE);
        assert_eq!(page.per_page(), DEFAULT_PER_PAGE);
    }
}
