//! # Application Layer
//!
//! Orchestration of the fixed upstream call chain and the per-participant
//! enrichment fan-out, plus the application error type the REST layer maps
//! to HTTP statuses.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::event_data::{EventDataQuery, EventDataService};
