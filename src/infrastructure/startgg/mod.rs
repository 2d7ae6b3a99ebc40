//! # start.gg Adapter
//!
//! GraphQL client for the start.gg tournament API.
//!
//! The adapter exposes the [`TournamentApi`] port consumed by the application
//! layer, implemented by [`StartGgClient`] over a shared [`GraphqlClient`].
//! All requests go to a single configured endpoint with a static bearer
//! token; there is no retry, caching, or rate-limit handling.

pub mod client;
pub mod error;
pub mod queries;
pub mod traits;

pub use client::{GraphqlClient, StartGgClient};
pub use error::{UpstreamError, UpstreamResult};
pub use traits::TournamentApi;
