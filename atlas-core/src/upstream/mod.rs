//! Upstream API clients — one fetcher per third-party resource
//!
//! Provides a thin typed client per external API:
//! - **Geocode** — forward geocoding of a street address (Google Maps style)
//! - **Weather** — multi-day forecast for a coordinate pair (Dark Sky style)
//! - **Events** — event search around a coordinate pair (Eventbrite style)
//!
//! Each client issues a single outbound call per request, parses the JSON
//! body into typed structs, and surfaces transport errors and non-2xx
//! statuses as `UpstreamError`. There are no retries; a failed fetch is
//! terminal for the request that triggered it.

pub mod events;
pub mod geocode;
pub mod weather;

pub use events::EventsClient;
pub use geocode::GeocodeClient;
pub use weather::WeatherClient;

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Fixed search radius for event lookups, in kilometres.
pub const EVENT_SEARCH_RADIUS_KM: u32 = 10;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fetch errors shared by all upstream clients.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("no results in upstream response")]
    NoResults,

    #[error("Missing API key")]
    MissingApiKey,
}

pub(crate) fn build_http_client() -> Result<Client, UpstreamError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// The three upstream clients, built once at startup and shared by every
/// request.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub geocode: GeocodeClient,
    pub weather: WeatherClient,
    pub events: EventsClient,
}

impl Upstream {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            geocode: GeocodeClient::with_base_url(
                &config.geocode_api_key,
                config.geocode_base_url.clone(),
            )?,
            weather: WeatherClient::with_base_url(
                &config.weather_api_key,
                config.weather_base_url.clone(),
            )?,
            events: EventsClient::with_base_url(
                &config.events_api_key,
                config.events_base_url.clone(),
            )?,
        })
    }
}
