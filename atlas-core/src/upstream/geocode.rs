use reqwest::Client;
use serde::Deserialize;

use super::{build_http_client, UpstreamError};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

// ============================================================================
// Geocoding API structs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodeErrorResponse {
    error_message: Option<String>,
}

// ============================================================================
// GeocodeClient
// ============================================================================

/// Forward geocoding client — resolves an address string to coordinates.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodeClient {
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

    /// Geocode an address. The response may carry zero results; emptiness is
    /// left to the caller, which decides whether that is an error.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse, UpstreamError> {
        let url = format!("{}/maps/api/geocode/json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeocodeErrorResponse>(&error_body)
                .ok()
                .and_then(|e| e.error_message)
                .unwrap_or(error_body);

            tracing::error!(code = status.as_u16(), message = %message, "Geocoding API error");

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

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_geocode_response() -> serde_json::Value {
        serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "123 Main St",
                "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
            }]
        })
    }

    #[tokio::test]
    async fn test_geocode_parses_first_result() {
        let mock_server = MockServer::start().await;
        let client = GeocodeClient::with_base_url("test-key", mock_server.uri())
            .expect("Failed to create client");

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("address", "123 Main St"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_geocode_response()))
            .mount(&mock_server)
            .await;

        let geo = client.geocode("123 Main St").await.expect("geocode failed");
        assert_eq!(geo.results.len(), 1);
        assert_eq!(geo.results[0].formatted_address, "123 Main St");
        assert_eq!(geo.results[0].geometry.location.lat, 1.0);
        assert_eq!(geo.results[0].geometry.location.lng, 2.0);
    }

    #[tokio::test]
    async fn test_geocode_surfaces_api_error_message() {
        let mock_server = MockServer::start().await;
        let client = GeocodeClient::with_base_url("test-key", mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "status": "REQUEST_DENIED",
                "error_message": "The provided API key is invalid."
            })))
            .mount(&mock_server)
            .await;

        let result = client.geocode("anywhere").await;
        match result {
            Err(UpstreamError::Api { code, message }) => {
                assert_eq!(code, 403);
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("Expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_geocode_empty_results_is_ok_and_empty() {
        let mock_server = MockServer::start().await;
        let client = GeocodeClient::with_base_url("test-key", mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let geo = client.geocode("xyzzy").await.expect("geocode failed");
        assert!(geo.results.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_rejected_at_construction() {
        match GeocodeClient::new("") {
            Err(UpstreamError::MissingApiKey) => {}
            _ => panic!("Expected MissingApiKey error"),
        }
    }
}
