//! # Configuration
//!
//! Layered runtime settings: built-in defaults, an optional
//! `config/default.toml`, then environment variables prefixed `RELAY__`
//! (e.g. `RELAY__SERVER__PORT=8080`). The conventional `PORT` and
//! `START_GG_API_KEY` variables are honored as final overrides.
//!
//! A `.env` file is loaded best-effort by `main` before settings are read.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Complete runtime settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// CORS settings.
    pub cors: CorsSettings,
    /// Upstream start.gg settings.
    pub startgg: StartGgSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// The single browser origin allowed to call the relay.
    pub allowed_origin: String,
}

/// Upstream start.gg settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StartGgSettings {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Static bearer token forwarded on every upstream request.
    pub api_key: String,
    /// Timeout for the event and standings queries, in milliseconds.
    pub request_timeout_ms: u64,
    /// Timeout for each per-participant character lookup, in milliseconds.
    pub character_timeout_ms: u64,
}

impl Settings {
    /// Loads settings from defaults, optional file, and environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be read, a value has
    /// the wrong type, or no API key is supplied by any source.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("cors.allowed_origin", "http://localhost:5173")?
            .set_default("startgg.endpoint", "https://api.start.gg/gql/alpha")?
            .set_default("startgg.api_key", "")?
            .set_default("startgg.request_timeout_ms", 10_000)?
            .set_default("startgg.character_timeout_ms", 5_000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("RELAY").separator("__"));

        // Conventional variable names from the original deployment.
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(api_key) = env::var("START_GG_API_KEY") {
            builder = builder.set_override("startgg.api_key", api_key)?;
        }

        Self::from_config(builder.build()?)
    }

    /// Deserializes a built configuration and enforces the API key
    /// requirement.
    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;

        if settings.startgg.api_key.is_empty() {
            return Err(ConfigError::Message(
                "START_GG_API_KEY is not set".to_string(),
            ));
        }

        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn deserializes_full_settings() {
        let settings = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [cors]
            allowed_origin = "http://localhost:5173"

            [startgg]
            endpoint = "https://api.start.gg/gql/alpha"
            api_key = "secret"
            request_timeout_ms = 10000
            character_timeout_ms = 5000
            "#,
        );
        assert_eq!(settings.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(settings.startgg.api_key, "secret");
        assert_eq!(settings.cors.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let config = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                host = "0.0.0.0"
                port = 3000

                [cors]
                allowed_origin = "http://localhost:5173"

                [startgg]
                endpoint = "https://api.start.gg/gql/alpha"
                api_key = ""
                request_timeout_ms = 10000
                character_timeout_ms = 5000
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let err = Settings::from_config(config).unwrap_err();
        assert!(err.to_string().contains("START_GG_API_KEY"));
    }
}
