//! # Tournament API Port
//!
//! Port definition for the upstream tournament data source.
//!
//! The application layer depends on this trait rather than on the concrete
//! GraphQL client, which keeps orchestration and enrichment testable against
//! an in-memory mock.

use crate::domain::entities::{Character, Event, Standing};
use crate::domain::value_objects::{EventId, EventSlug, PageRequest, ParticipantId};
use crate::infrastructure::startgg::error::UpstreamResult;
use async_trait::async_trait;
use std::fmt;

/// Upstream tournament data source.
#[async_trait]
pub trait TournamentApi: Send + Sync + fmt::Debug {
    /// Resolves an event from its slug.
    ///
    /// Returns `Ok(None)` when the slug matches no event.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if the call fails at the transport, HTTP,
    /// or GraphQL level.
    async fn resolve_event(&self, slug: &EventSlug) -> UpstreamResult<Option<Event>>;

    /// Fetches one page of standings for an event.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if the call fails or the event vanished
    /// between resolution and the standings query.
    async fn event_standings(
        &self,
        event_id: EventId,
        page: PageRequest,
    ) -> UpstreamResult<Vec<Standing>>;

    /// Fetches the characters a participant plays.
    ///
    /// Returns an empty list when the participant has no character data.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if the call fails at the transport, HTTP,
    /// or GraphQL level.
    async fn participant_characters(
        &self,
        participant_id: ParticipantId,
    ) -> UpstreamResult<Vec<Character>>;
}
