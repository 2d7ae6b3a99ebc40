//! # Character Enrichment
//!
//! Fan-out/fan-in of per-participant character lookups.
//!
//! For every participant in a standings page, [`CharacterEnrichment`] spawns
//! an independent lookup with a per-request timeout, joins all of them, and
//! merges the results back onto the standings by participant id. Enrichment
//! never fails the surrounding request: a lookup that errors, times out, or
//! returns nothing leaves its participant with the placeholder character.

use crate::domain::entities::{Character, EnrichedStanding, Standing};
use crate::domain::value_objects::ParticipantId;
use crate::infrastructure::startgg::traits::TournamentApi;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Configuration for character enrichment.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Per-lookup timeout in milliseconds.
    pub per_request_timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            per_request_timeout_ms: 5000,
        }
    }
}

impl EnrichmentConfig {
    /// Creates a configuration with the given per-lookup timeout.
    #[must_use]
    pub fn with_timeout(per_request_timeout_ms: u64) -> Self {
        Self {
            per_request_timeout_ms,
        }
    }
}

/// Engine that attaches character data to standings participants.
#[derive(Debug, Clone)]
pub struct CharacterEnrichment {
    api: Arc<dyn TournamentApi>,
    config: EnrichmentConfig,
}

impl CharacterEnrichment {
    /// Creates a new enrichment engine.
    #[must_use]
    pub fn new(api: Arc<dyn TournamentApi>, config: EnrichmentConfig) -> Self {
        Self { api, config }
    }

    /// Enriches a standings page with character data.
    ///
    /// Lookups run concurrently, one per distinct participant. Failures are
    /// logged and degrade to the placeholder character; this method itself
    /// cannot fail.
    pub async fn enrich(&self, standings: Vec<Standing>) -> Vec<EnrichedStanding> {
        let participant_ids: Vec<ParticipantId> = standings
            .iter()
            .filter_map(|s| s.entrant.as_ref())
            .flat_map(|e| e.participants.iter().map(|p| p.id))
            .collect();

        let characters = self.collect_characters(&participant_ids).await;

        standings
            .into_iter()
            .map(|standing| {
                EnrichedStanding::from_standing(standing, |id| {
                    characters.get(&id).cloned().unwrap_or_default()
                })
            })
            .collect()
    }

    /// Fans out one lookup per participant and joins the results.
    async fn collect_characters(
        &self,
        participant_ids: &[ParticipantId],
    ) -> HashMap<ParticipantId, Vec<Character>> {
        let per_request = Duration::from_millis(self.config.per_request_timeout_ms);
        let mut handles = Vec::with_capacity(participant_ids.len());

        for &participant_id in participant_ids {
            let api = Arc::clone(&self.api);

            let handle = tokio::spawn(async move {
                let result = timeout(per_request, api.participant_characters(participant_id)).await;
                let characters = match result {
                    Ok(Ok(characters)) => {
                        debug!(%participant_id, count = characters.len(), "fetched characters");
                        characters
                    }
                    Ok(Err(e)) => {
                        warn!(%participant_id, error = %e, "character lookup failed, using placeholder");
                        Vec::new()
                    }
                    Err(_) => {
                        warn!(%participant_id, "character lookup timed out, using placeholder");
                        Vec::new()
                    }
                };
                (participant_id, characters)
            });

            handles.push(handle);
        }

        let mut characters = HashMap::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok((participant_id, list)) => {
                    characters.insert(participant_id, list);
                }
                Err(e) => {
                    warn!(error = %e, "character lookup task panicked");
                }
            }
        }

        characters
    }
}
