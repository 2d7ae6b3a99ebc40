//! # Standing Entities
//!
//! One page of event standings as returned by the upstream API, before
//! character enrichment.

use crate::domain::value_objects::{EntrantId, ParticipantId};
use serde::{Deserialize, Serialize};

/// A single standings node.
///
/// Upstream may omit the entrant (e.g. a disqualified or anonymized entry),
/// in which case the standing passes through the relay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Final or current placement, when available.
    pub placement: Option<i64>,
    /// The entrant holding this placement.
    pub entrant: Option<Entrant>,
}

/// An entrant: a team or solo entry within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    /// Upstream entrant id.
    pub id: EntrantId,
    /// Entrant display name (sponsor prefix included).
    pub name: String,
    /// Individual players behind this entry.
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// A participant: an individual player within an entrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Upstream participant id, the join key for character enrichment.
    pub id: ParticipantId,
    /// The player's gamer tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamer_tag: Option<String>,
}
