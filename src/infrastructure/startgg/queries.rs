//! # GraphQL Documents
//!
//! The three fixed queries the relay sends to start.gg, plus their variable
//! and response payload types. The documents and their selections are part
//! of the relay's contract with the upstream API and are never built
//! dynamically.

use crate::domain::entities::{Character, Event, Standing};
use crate::domain::value_objects::{EventId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Resolves an event id and name from its slug.
pub const EVENT_BY_SLUG: &str = r"
    query getEventId($slug: String!) {
      event(slug: $slug) {
        id
        name
      }
    }
";

/// Fetches one page of standings for an event.
pub const EVENT_STANDINGS: &str = r"
    query EventStandings($eventId: ID!, $page: Int!, $perPage: Int!) {
      event(id: $eventId) {
        id
        name
        standings(query: {
          perPage: $perPage,
          page: $page
        }) {
          nodes {
            placement
            entrant {
              id
              name
              participants {
                id
                gamerTag
              }
            }
          }
        }
      }
    }
";

/// Fetches the characters a participant plays.
pub const PARTICIPANT_CHARACTERS: &str = r"
    query GetCharacter($participantId: ID!) {
      participant(id: $participantId) {
        id
        characters {
          id
          name
          images {
            icon
            displayImage
          }
        }
      }
    }
";

/// Variables for [`EVENT_BY_SLUG`].
#[derive(Debug, Serialize)]
pub struct EventSlugVars<'a> {
    /// Event slug.
    pub slug: &'a str,
}

/// Variables for [`EVENT_STANDINGS`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsVars {
    /// Resolved event id.
    pub event_id: EventId,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
}

/// Variables for [`PARTICIPANT_CHARACTERS`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterVars {
    /// Participant to look up.
    pub participant_id: ParticipantId,
}

/// `data` payload of [`EVENT_BY_SLUG`].
#[derive(Debug, Deserialize)]
pub struct EventBySlugData {
    /// The resolved event; `None` when the slug matches nothing.
    pub event: Option<Event>,
}

/// `data` payload of [`EVENT_STANDINGS`].
#[derive(Debug, Deserialize)]
pub struct StandingsData {
    /// The event carrying the standings page.
    pub event: Option<StandingsEvent>,
}

/// Event node within a standings response.
#[derive(Debug, Deserialize)]
pub struct StandingsEvent {
    /// Event id echoed back by upstream.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Standings connection.
    pub standings: StandingsConnection,
}

/// Standings connection wrapper.
#[derive(Debug, Deserialize)]
pub struct StandingsConnection {
    /// Standings nodes for the requested page.
    #[serde(default)]
    pub nodes: Vec<Standing>,
}

/// `data` payload of [`PARTICIPANT_CHARACTERS`].
#[derive(Debug, Deserialize)]
pub struct CharacterData {
    /// The participant node, when it exists.
    pub participant: Option<ParticipantCharacters>,
}

/// Participant node carrying character data.
#[derive(Debug, Deserialize)]
pub struct ParticipantCharacters {
    /// Participant id echoed back by upstream.
    pub id: ParticipantId,
    /// Characters played; upstream may return null.
    #[serde(default)]
    pub characters: Option<Vec<Character>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standings_vars_serialize_camel_case() {
        let vars = StandingsVars {
            event_id: EventId::new(612940),
            page: 2,
            per_page: 8,
        };
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json["eventId"], 612940);
        assert_eq!(json["perPage"], 8);
    }

    #[test]
    fn character_vars_serialize_camel_case() {
        let vars = CharacterVars {
            participant_id: ParticipantId::new(1842012),
        };
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json["participantId"], 1842012);
    }

    #[test]
    fn standings_data_parses_nested_nodes() {
        let json = r#"{
            "event": {
                "id": 612940,
                "name": "Ultimate Singles",
                "standings": {
                    "nodes": [
                        {"placement": 1, "entrant": {"id": 1, "name": "A", "participants": []}}
                    ]
                }
            }
        }"#;
        let data: StandingsData = serde_json::from_str(json).unwrap();
        let event = data.event.unwrap();
        assert_eq!(event.standings.nodes.len(), 1);
    }

    #[test]
    fn character_data_handles_null_characters() {
        let json = r#"{"participant": {"id": 7, "characters": null}}"#;
        let data: CharacterData = serde_json::from_str(json).unwrap();
        assert!(data.participant.unwrap().characters.is_none());
    }

    #[test]
    fn event_by_slug_handles_null_event() {
        let data: EventBySlugData = serde_json::from_str(r#"{"event": null}"#).unwrap();
        assert!(data.event.is_none());
    }
}
