//! # Identifier Value Objects
//!
//! Numeric identifiers assigned by the upstream tournament API.
//!
//! start.gg returns events, entrants, participants, and characters with
//! numeric ids; each gets its own transparent newtype so they cannot be
//! confused at a call site.
//!
//! # Examples
//!
//! ```
//! use standings_relay::domain::value_objects::ParticipantId;
//!
//! let id = ParticipantId::new(1842012);
//! assert_eq!(id.value(), 1842012);
//! assert_eq!(id.to_string(), "1842012");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from its raw numeric value.
            #[inline]
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            #[inline]
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a tournament event.
    EventId
);

numeric_id!(
    /// Identifier of an entrant (a team or a solo entry) within an event.
    EntrantId
);

numeric_id!(
    /// Identifier of a participant (an individual player) within an entrant.
    ParticipantId
);

numeric_id!(
    /// Identifier of a playable character.
    CharacterId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_json_as_numbers() {
        let id = EventId::new(612940);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "612940");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(ParticipantId::new(42).to_string(), "42");
        assert_eq!(CharacterId::new(0).value(), 0);
    }

    #[test]
    fn from_i64() {
        let id: EntrantId = 7i64.into();
        assert_eq!(id.value(), 7);
    }
}
