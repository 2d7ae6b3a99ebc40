//! # Entities
//!
//! Tournament data shapes, split between what the upstream API returns and
//! what the relay emits.
//!
//! - [`Event`], [`Standing`], [`Entrant`], [`Participant`]: upstream shapes
//! - [`Character`], [`CharacterImages`]: character enrichment data
//! - [`EventDataResponse`] and the `Enriched*` types: the combined payload
//!   the relay returns to its client

pub mod character;
pub mod event;
pub mod payload;
pub mod standing;

pub use character::{Character, CharacterImages};
pub use event::Event;
pub use payload::{
    EnrichedEntrant, EnrichedParticipant, EnrichedStanding, EventDataResponse, EventPayload,
    StandingsPayload,
};
pub use standing::{Entrant, Participant, Standing};
