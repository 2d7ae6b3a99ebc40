//! # GraphQL Client
//!
//! reqwest wrapper for the start.gg GraphQL endpoint.
//!
//! [`GraphqlClient`] handles the transport concerns: bearer authentication,
//! request timeout, status-to-error mapping, and the GraphQL envelope.
//! [`StartGgClient`] implements the [`TournamentApi`] port on top of it with
//! the fixed query documents.
//!
//! # Examples
//!
//! ```ignore
//! use standings_relay::infrastructure::startgg::{GraphqlClient, StartGgClient};
//!
//! let gql = GraphqlClient::new("https://api.start.gg/gql/alpha", "token", 5000)?;
//! let client = StartGgClient::new(gql);
//! let event = client.resolve_event(&slug).await?;
//! ```

use crate::domain::entities::{Character, Event, Standing};
use crate::domain::value_objects::{EventId, EventSlug, PageRequest, ParticipantId};
use crate::infrastructure::startgg::error::{UpstreamError, UpstreamResult};
use crate::infrastructure::startgg::queries;
use crate::infrastructure::startgg::traits::TournamentApi;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Wire shape of a GraphQL request.
#[derive(Debug, serde::Serialize)]
struct GraphqlRequest<'a, V: serde::Serialize> {
    query: &'a str,
    variables: V,
}

/// Wire shape of a GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// HTTP client for a single GraphQL endpoint.
///
/// Every request is a POST of `{ query, variables }` with a static bearer
/// token. The client is cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Creates a new client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - GraphQL endpoint URL.
    /// * `api_key` - Bearer token forwarded on every request.
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Internal` if the underlying client cannot be
    /// built or the token is not a valid header value.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: &str,
        timeout_ms: u64,
    ) -> UpstreamResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| UpstreamError::internal(format!("invalid API key header: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| UpstreamError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Executes a GraphQL query and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, a status error for
    /// non-2xx responses, `UpstreamError::Graphql` when the envelope carries
    /// errors, and `UpstreamError::MissingData` when it carries neither data
    /// nor errors.
    pub async fn execute<T, V>(&self, query: &str, variables: V) -> UpstreamResult<T>
    where
        T: DeserializeOwned,
        V: serde::Serialize,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        self.handle_response(response).await
    }

    /// Checks status and unwraps the GraphQL envelope.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> UpstreamResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let envelope = response
            .json::<GraphqlEnvelope<T>>()
            .await
            .map_err(|e| UpstreamError::parse(format!("failed to parse response: {e}")))?;

        if !envelope.errors.is_empty() {
            return Err(UpstreamError::graphql(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope.data.ok_or(UpstreamError::MissingData)
    }
}

/// Maps a reqwest error to an upstream error.
fn map_reqwest_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::timeout("request timed out")
    } else if error.is_connect() {
        UpstreamError::connection(format!("connection failed: {error}"))
    } else {
        UpstreamError::connection(format!("HTTP request failed: {error}"))
    }
}

/// Maps a non-success HTTP status to an upstream error.
fn map_status_error(status: StatusCode, body: &str) -> UpstreamError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            UpstreamError::authentication(format!("authentication failed: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::rate_limited("rate limit exceeded"),
        s if s.is_server_error() => UpstreamError::server(s.as_u16(), body.to_string()),
        s => UpstreamError::http(s.as_u16(), body.to_string()),
    }
}

/// [`TournamentApi`] implementation backed by the start.gg GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct StartGgClient {
    gql: GraphqlClient,
}

impl StartGgClient {
    /// Creates a new start.gg client over an existing GraphQL client.
    #[must_use]
    pub fn new(gql: GraphqlClient) -> Self {
        Self { gql }
    }
}

#[async_trait]
impl TournamentApi for StartGgClient {
    async fn resolve_event(&self, slug: &EventSlug) -> UpstreamResult<Option<Event>> {
        let data: queries::EventBySlugData = self
            .gql
            .execute(
                queries::EVENT_BY_SLUG,
                queries::EventSlugVars {
                    slug: slug.as_str(),
                },
            )
            .await?;
        Ok(data.event)
    }

    async fn event_standings(
        &self,
        event_id: EventId,
        page: PageRequest,
    ) -> UpstreamResult<Vec<Standing>> {
        let data: queries::StandingsData = self
            .gql
            .execute(
                queries::EVENT_STANDINGS,
                queries::StandingsVars {
                    event_id,
                    page: page.page(),
                    per_page: page.per_page(),
                },
            )
            .await?;

        // The id was just resolved; a null event here is an upstream anomaly.
        let event = data.event.ok_or(UpstreamError::MissingData)?;
        Ok(event.standings.nodes)
    }

    async fn participant_characters(
        &self,
        participant_id: ParticipantId,
    ) -> UpstreamResult<Vec<Character>> {
        let data: queries::CharacterData = self
            .gql
            .execute(
                queries::PARTICIPANT_CHARACTERS,
                queries::CharacterVars { participant_id },
            )
            .await?;

        Ok(data
            .participant
            .and_then(|p| p.characters)
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = GraphqlClient::new("https://api.start.gg/gql/alpha", "token", 5000);
        assert!(client.is_ok());
    }

    #[test]
    fn invalid_api_key_rejected() {
        let client = GraphqlClient::new("https://api.start.gg/gql/alpha", "bad\nkey", 5000);
        assert!(client.is_err());
    }

    #[test]
    fn envelope_with_errors_parses() {
        let json = r#"{"data": null, "errors": [{"message": "not authorized"}]}"#;
        let envelope: GraphqlEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.errors.len(), 1);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn status_mapping() {
        assert!(map_status_error(StatusCode::UNAUTHORIZED, "").is_auth());
        assert!(map_status_error(StatusCode::TOO_MANY_REQUESTS, "").is_retryable());
        assert!(map_status_error(StatusCode::BAD_GATEWAY, "").is_retryable());
        assert!(!map_status_error(StatusCode::BAD_REQUEST, "").is_retryable());
    }
}
