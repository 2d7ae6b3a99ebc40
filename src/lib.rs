//! # Standings Relay
//!
//! A small backend relay for tournament standings data.
//!
//! The service accepts an event slug from a client, queries the start.gg
//! GraphQL API in a fixed sequence (resolve event id → fetch a page of
//! standings → enrich each participant with character data), reshapes the
//! combined result into a single JSON payload, and returns it. It is
//! stateless; the only concurrency is a bounded fan-out of independent
//! per-participant enrichment requests joined before responding.
//!
//! # Architecture
//!
//! - [`domain`] - Value objects and entity shapes for tournament data
//! - [`application`] - Orchestration services and application errors
//! - [`infrastructure`] - The start.gg GraphQL adapter
//! - [`api`] - The REST surface (axum)
//! - [`config`] - Layered runtime settings

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
