//! # Combined Payload
//!
//! The enriched response shape the relay returns to its client: the resolved
//! event wrapping standings whose participants carry character data.
//!
//! The wire format mirrors the upstream GraphQL shape with one addition, the
//! `characters` array on each participant:
//!
//! ```json
//! {
//!   "event": {
//!     "id": 612940,
//!     "name": "Ultimate Singles",
//!     "standings": {
//!       "nodes": [
//!         {
//!           "placement": 1,
//!           "entrant": {
//!             "id": 9000001,
//!             "name": "TSM | Leffen",
//!             "participants": [
//!               { "id": 1842012, "gamerTag": "Leffen", "characters": [] }
//!             ]
//!           }
//!         }
//!       ]
//!     }
//!   }
//! }
//! ```

use crate::domain::entities::character::Character;
use crate::domain::entities::event::Event;
use crate::domain::entities::standing::{Entrant, Participant, Standing};
use crate::domain::value_objects::{EntrantId, EventId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Top-level response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDataResponse {
    /// The resolved event with enriched standings.
    pub event: EventPayload,
}

/// The resolved event carrying its enriched standings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Upstream event id.
    pub id: EventId,
    /// Event display name.
    pub name: String,
    /// Enriched standings for the requested page.
    pub standings: StandingsPayload,
}

/// Standings connection wrapper, mirroring the upstream `nodes` nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsPayload {
    /// Enriched standings nodes.
    pub nodes: Vec<EnrichedStanding>,
}

/// A standings node whose participants carry character data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedStanding {
    /// Final or current placement, when available.
    pub placement: Option<i64>,
    /// The entrant holding this placement.
    pub entrant: Option<EnrichedEntrant>,
}

/// An entrant whose participants carry character data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedEntrant {
    /// Upstream entrant id.
    pub id: EntrantId,
    /// Entrant display name.
    pub name: String,
    /// Enriched participants.
    pub participants: Vec<EnrichedParticipant>,
}

/// A participant with attached character data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedParticipant {
    /// Upstream participant id.
    pub id: ParticipantId,
    /// The player's gamer tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamer_tag: Option<String>,
    /// Characters played; never empty (placeholder on fallback).
    pub characters: Vec<Character>,
}

impl EnrichedParticipant {
    /// Attaches character data to a participant.
    ///
    /// An empty list falls back to the placeholder so the payload shape is
    /// uniform.
    #[must_use]
    pub fn from_participant(participant: Participant, characters: Vec<Character>) -> Self {
        let characters = if characters.is_empty() {
            vec![Character::placeholder()]
        } else {
            characters
        };
        Self {
            id: participant.id,
            gamer_tag: participant.gamer_tag,
            characters,
        }
    }
}

impl EnrichedEntrant {
    /// Builds an enriched entrant from an upstream entrant and a lookup for
    /// each participant's characters.
    #[must_use]
    pub fn from_entrant(
        entrant: Entrant,
        mut characters_for: impl FnMut(ParticipantId) -> Vec<Character>,
    ) -> Self {
        let participants = entrant
            .participants
            .into_iter()
            .map(|p| {
                let characters = characters_for(p.id);
                EnrichedParticipant::from_participant(p, characters)
            })
            .collect();
        Self {
            id: entrant.id,
            name: entrant.name,
            participants,
        }
    }
}

impl EnrichedStanding {
    /// Builds an enriched standing, passing entrant-less nodes through.
    #[must_use]
    pub fn from_standing(
        standing: Standing,
        characters_for: impl FnMut(ParticipantId) -> Vec<Character>,
    ) -> Self {
        Self {
            placement: standing.placement,
            entrant: standing
                .entrant
                .map(|e| EnrichedEntrant::from_entrant(e, characters_for)),
        }
    }
}

impl EventDataResponse {
    /// Assembles the final payload from the resolved event and its enriched
    /// standings.
    #[must_use]
    pub fn new(event: Event, nodes: Vec<EnrichedStanding>) -> Self {
        Self {
            event: EventPayload {
                id: event.id,
                name: event.name,
                standings: StandingsPayload { nodes },
            },
        }
    }
}
