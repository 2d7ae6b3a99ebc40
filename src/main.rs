//! Server entry point: load configuration, wire the upstream client and
//! services, and serve the REST surface.

use anyhow::Context;
use axum::http::HeaderValue;
use standings_relay::api::rest::{create_router, AppState};
use standings_relay::application::services::enrichment::{
    CharacterEnrichment, EnrichmentConfig,
};
use standings_relay::application::services::EventDataService;
use standings_relay::config::Settings;
use standings_relay::infrastructure::startgg::{GraphqlClient, StartGgClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("failed to load settings")?;

    let gql = GraphqlClient::new(
        &settings.startgg.endpoint,
        &settings.startgg.api_key,
        settings.startgg.request_timeout_ms,
    )
    .context("failed to build start.gg client")?;
    let api = Arc::new(StartGgClient::new(gql));

    let enrichment = CharacterEnrichment::new(
        api.clone(),
        EnrichmentConfig::with_timeout(settings.startgg.character_timeout_ms),
    );
    let service = EventDataService::new(api, enrichment);
    let state = Arc::new(AppState { service });

    let allowed_origin: HeaderValue = settings
        .cors
        .allowed_origin
        .parse()
        .context("invalid CORS origin")?;
    let router = create_router(state, allowed_origin);

    let addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, upstream = %settings.startgg.endpoint, "server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
