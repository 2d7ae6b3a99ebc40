//! # Infrastructure Layer
//!
//! Adapters for external systems. The only external system here is the
//! start.gg GraphQL API.

pub mod startgg;
