use reqwest::Client;
use serde::Deserialize;

use super::{build_http_client, UpstreamError};

const DEFAULT_BASE_URL: &str = "https://api.darksky.net";

// ============================================================================
// Forecast API structs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub data: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub summary: String,
    /// Unix seconds at the start of the forecast day.
    pub time: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastErrorResponse {
    error: Option<String>,
}

// ============================================================================
// WeatherClient
// ============================================================================

/// Forecast client — fetches the multi-day forecast for a coordinate pair.
/// Every day in the response maps to one record; the count is unbounded.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: &str) -> Result<Self, UpstreamError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing / integration)
    pub fn with_base_url(api_key: &str, base_url: String) -> Result<Self, UpstreamError> {
        if api_key.is_empty() {
            return Err(UpstreamError::MissingApiKey);
        }

        Ok(Self {
            client: build_http_client()?,
            api_key: api_key.to_string(),
            base_url,
        })
    }

    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, UpstreamError> {
        // The key rides in the path on this API, not in a query parameter.
        let url = format!(
            "{}/forecast/{}/{},{}",
            self.base_url, self.api_key, latitude, longitude
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ForecastErrorResponse>(&error_body)
                .ok()
                .and_then(|e| e.error)
                .unwrap_or(error_body);

            tracing::error!(code = status.as_u16(), message = %message, "Forecast API error");

            return Err(UpstreamError::Api {
                code: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
