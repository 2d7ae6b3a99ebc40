//! # Event Data Orchestration
//!
//! The fixed upstream call chain: resolve the slug to an event, fetch one
//! page of standings, enrich participants with characters, assemble the
//! combined payload.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::enrichment::CharacterEnrichment;
use crate::domain::entities::EventDataResponse;
use crate::domain::value_objects::{EventSlug, PageRequest};
use crate::infrastructure::startgg::traits::TournamentApi;
use std::sync::Arc;
use tracing::info;

/// A validated inbound query.
#[derive(Debug, Clone)]
pub struct EventDataQuery {
    /// Validated event slug.
    pub slug: EventSlug,
    /// Standings page to fetch.
    pub page: PageRequest,
}

/// Service executing the resolve → standings → enrich chain.
#[derive(Debug, Clone)]
pub struct EventDataService {
    api: Arc<dyn TournamentApi>,
    enrichment: CharacterEnrichment,
}

impl EventDataService {
    /// Creates a new service.
    #[must_use]
    pub fn new(api: Arc<dyn TournamentApi>, enrichment: CharacterEnrichment) -> Self {
        Self { api, enrichment }
    }

    /// Fetches and assembles the combined event payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::EventNotFound`] when the slug resolves to
    /// no event, or [`ApplicationError::Upstream`] when the resolution or
    /// standings call fails. Enrichment failures degrade to placeholder
    /// characters and never surface here.
    pub async fn event_data(&self, query: EventDataQuery) -> ApplicationResult<EventDataResponse> {
        info!(slug = %query.slug, "resolving event id");
        let event = self
            .api
            .resolve_event(&query.slug)
            .await?
            .ok_or_else(|| ApplicationError::event_not_found(query.slug.as_str()))?;
        info!(event_id = %event.id, "resolved event");

        info!(event_id = %event.id, page = query.page.page(), per_page = query.page.per_page(), "fetching standings");
        let standings = self.api.event_standings(event.id, query.page).await?;

        let nodes = self.enrichment.enrich(standings).await;
        info!(event_id = %event.id, nodes = nodes.len(), "assembled event data");

        Ok(EventDataResponse::new(event, nodes))
    }
}
