//! # Domain Layer
//!
//! Value objects and entity shapes for tournament standings data.
//!
//! The domain layer is free of transport concerns: it defines what an event,
//! a standing, and a character look like, plus the validated inputs (slug,
//! pagination) a request must be reduced to before any upstream call is made.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
