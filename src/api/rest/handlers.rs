//! # REST Handlers
//!
//! Request/response DTOs, shared state, and the error-to-status mapping.
//!
//! The mapping mirrors the original relay's contract: an unknown slug is a
//! 404 with `{"error": "Event not found"}`; any upstream failure is a 500
//! with `{"error": "Error fetching event data"}` and the underlying cause
//! logged. Requests that cannot be reduced to valid domain values are 400s.

use crate::application::error::ApplicationError;
use crate::application::services::event_data::EventDataQuery;
use crate::application::services::EventDataService;
use crate::domain::entities::EventDataResponse;
use crate::domain::value_objects::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::domain::value_objects::{EventSlug, PageRequest};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The orchestration service behind `POST /api/event-data`.
    pub service: EventDataService,
}

/// Body of `POST /api/event-data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDataRequest {
    /// Event slug to resolve.
    pub slug: String,
    /// 1-based standings page (default 1).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Standings page size (default 8).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Error body returned by all failure paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves traffic.
    pub status: String,
}

/// REST-layer error wrapping an application error.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ApplicationError::Domain(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApplicationError::EventNotFound(_) => {
                (StatusCode::NOT_FOUND, "Event not found".to_string())
            }
            ApplicationError::Upstream(e) => {
                error!(error = %e, "error fetching event data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching event data".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// `POST /api/event-data`: resolve a slug and return enriched standings.
///
/// # Errors
///
/// Returns 400 for invalid slug or pagination, 404 when the slug resolves to
/// no event, and 500 for any upstream failure.
pub async fn event_data(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventDataRequest>,
) -> Result<Json<EventDataResponse>, ApiError> {
    let slug = EventSlug::new(&request.slug).map_err(ApplicationError::from)?;
    let page =
        PageRequest::new(request.page, request.per_page).map_err(ApplicationError::from)?;

    let payload = state
        .service
        .event_data(EventDataQuery { slug, page })
        .await?;

    Ok(Json(payload))
}

/// `GET /api/health`: liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_original_relay() {
        let request: EventDataRequest =
            serde_json::from_str(r#"{"slug": "tournament/evo-2024"}"#).unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 8);
    }

    #[test]
    fn request_accepts_camel_case_per_page() {
        let request: EventDataRequest =
            serde_json::from_str(r#"{"slug": "s", "page": 3, "perPage": 16}"#).unwrap();
        assert_eq!(request.page, 3);
        assert_eq!(request.per_page, 16);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            ApiError(ApplicationError::event_not_found("tournament/nope")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_maps_to_500() {
        let err = crate::infrastructure::startgg::UpstreamError::timeout("slow");
        let response = ApiError(ApplicationError::from(err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = crate::domain::DomainError::invalid_slug("slug must not be empty");
        let response = ApiError(ApplicationError::from(err)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
