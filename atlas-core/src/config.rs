use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration.
///
/// Values are read from an optional `atlas.toml` and then overridden by
/// environment variables with the `ATLAS` prefix and `__` separator, so a
/// deployment can be configured from the environment alone, e.g.
/// `ATLAS__DATABASE__URL`, `ATLAS__UPSTREAM__GEOCODE_API_KEY`,
/// `ATLAS__SERVICE__PORT`.
#[derive(Debug, Deserialize, Clone)]
pub struct AtlasConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub geocode_api_key: String,
    pub weather_api_key: String,
    pub events_api_key: String,
    #[serde(default = "default_geocode_base_url")]
    pub geocode_base_url: String,
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    #[serde(default = "default_events_base_url")]
    pub events_base_url: String,
}

fn default_geocode_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.darksky.net".to_string()
}

fn default_events_base_url() -> String {
    "https://www.eventbriteapi.com".to_string()
}

impl AtlasConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("ATLAS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        s.try_deserialize()
    }
}
