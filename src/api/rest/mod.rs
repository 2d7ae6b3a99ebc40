//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /api/event-data` - Resolve a slug and return enriched standings
//! - `GET /api/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use standings_relay::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { service });
//! let router = create_router(state, "http://localhost:5173".parse()?);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, EventDataRequest, HealthResponse};
pub use routes::create_router;
