//! # Event Entity
//!
//! A tournament event as resolved from its slug.

use crate::domain::value_objects::EventId;
use serde::{Deserialize, Serialize};

/// A tournament event.
///
/// This is the result of the slug-resolution step: the numeric id used by
/// every subsequent upstream query, plus the display name echoed back to the
/// client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Upstream event id.
    pub id: EventId,
    /// Human-readable event name.
    pub name: String,
}
