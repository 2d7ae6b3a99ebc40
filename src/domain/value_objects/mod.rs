//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`EventId`], [`EntrantId`], [`ParticipantId`], [`CharacterId`]:
//!   numeric identifiers assigned by the upstream tournament API
//!
//! ## Request Inputs
//!
//! - [`EventSlug`]: validated, non-empty event slug
//! - [`PageRequest`]: page / per-page pair passed through to upstream

pub mod ids;
pub mod pagination;
pub mod slug;

pub use ids::{CharacterId, EntrantId, EventId, ParticipantId};
pub use pagination::PageRequest;
pub use slug::EventSlug;
