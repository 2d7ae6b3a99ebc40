//! # Event Slug Value Object
//!
//! Validated tournament event slug.
//!
//! Slugs identify an event on the upstream API, e.g.
//! `tournament/genesis-9/event/ultimate-singles`. The relay does not parse
//! their structure; it only refuses empty input before spending an upstream
//! round trip on it.
//!
//! # Examples
//!
//! ```
//! use standings_relay::domain::value_objects::EventSlug;
//!
//! let slug = EventSlug::new("tournament/genesis-9/event/ultimate-singles")?;
//! assert_eq!(slug.as_str(), "tournament/genesis-9/event/ultimate-singles");
//!
//! assert!(EventSlug::new("   ").is_err());
//! # Ok::<(), standings_relay::domain::DomainError>(())
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, non-empty event slug.
///
/// # Invariants
///
/// - Never empty
/// - No leading or trailing whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSlug(String);

impl EventSlug {
    /// Creates a new slug, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSlug`] if the trimmed input is empty.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_slug("slug must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the slug as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_slug() {
        let slug = EventSlug::new("tournament/genesis-9/event/ultimate-singles").unwrap();
        assert_eq!(slug.as_str(), "tournament/genesis-9/event/ultimate-singles");
    }

    #[test]
    fn trims_whitespace() {
        let slug = EventSlug::new("  tournament/evo-2024  ").unwrap();
        assert_eq!(slug.as_str(), "tournament/evo-2024");
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(EventSlug::new("").is_err());
        assert!(EventSlug::new("   \t").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let slug = EventSlug::new("tournament/evo-2024").unwrap();
        let json = serde_json::to_string(&slug).unwrap();
        assert_eq!(json, "\"tournament/evo-2024\"");
    }
}
