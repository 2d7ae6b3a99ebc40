//! # Application Services
//!
//! - [`enrichment`]: per-participant character fan-out and merge
//! - [`event_data`]: the resolve → standings → enrich call chain

pub mod enrichment;
pub mod event_data;

pub use enrichment::{CharacterEnrichment, EnrichmentConfig};
pub use event_data::{EventDataQuery, EventDataService};
