use reqwest::Client;
use serde::Deserialize;

use super::{build_http_client, UpstreamError, EVENT_SEARCH_RADIUS_KM};

const DEFAULT_BASE_URL: &str = "https://www.eventbriteapi.com";

// ============================================================================
// Event search API structs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct EventSearchResponse {
    #[serde(default)]
    pub events: Vec<UpstreamEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEvent {
    pub url: String,
    pub name: EventName,
    pub start: EventStart,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventName {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStart {
    /// Local start time, e.g. "2021-01-01T19:00:00".
    pub local: String,
}

#[derive(Debug, Deserialize)]
struct EventsErrorResponse {
    error_description: Option<String>,
}

// ============================================================================
// EventsClient
// ============================================================================

/// Event search client — finds events around a coordinate pair within a
/// fixed 10 km radius.
#[derive(Debug, Clone)]
pub struct EventsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl EventsClient {
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

    pub async fn search(&self, latitude: f64, longitude: f64) -> Result<EventSearchResponse, UpstreamError> {
        let url = format!("{}/v3/events/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("location.latitude", latitude.to_string()),
                ("location.longitude", longitude.to_string()),
                ("location.within", format!("{}km", EVENT_SEARCH_RADIUS_KM)),
                ("token", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<EventsErrorResponse>(&error_body)
                .ok()
                .and_then(|e| e.error_description)
                .unwrap_or(error_body);

            tracing::error!(code = status.as_u16(), message = %message, "Event search API error");

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

    fn mock_events_response(count: usize) -> serde_json::Value {
        let events: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "url": format!("https://ev.test/{}", i),
                    "name": { "text": format!("Event {}", i) },
                    "start": { "local": "2021-01-01T19:00:00" },
                    "summary": "A fine gathering"
                })
            })
            .collect();
        serde_json::json!({ "events": events })
    }

    #[tokio::test]
    async fn test_search_sends_radius_and_token() {
        let mock_server = MockServer::start().await;
        let client = EventsClient::with_base_url("test-token", mock_server.uri())
            .expect("Failed to create client");

        Mock::given(method("GET"))
            .and(path("/v3/events/search"))
            .and(query_param("location.latitude", "47.6062"))
            .and(query_param("location.longitude", "-122.3321"))
            .and(query_param("location.within", "10km"))
            .and(query_param("token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_events_response(3)))
            .mount(&mock_server)
            .await;

        let found = client.search(47.6062, -122.3321).await.expect("search failed");
        assert_eq!(found.events.len(), 3);
        assert_eq!(found.events[0].name.text, "Event 0");
        assert_eq!(found.events[2].url, "https://ev.test/2");
    }

    #[tokio::test]
    async fn test_search_does_not_truncate() {
        // Truncation to the result cap happens in the resolver, not here.
        let mock_server = MockServer::start().await;
        let client = EventsClient::with_base_url("test-token", mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_events_response(35)))
            .mount(&mock_server)
            .await;

        let found = client.search(0.0, 0.0).await.expect("search failed");
        assert_eq!(found.events.len(), 35);
    }

    #[tokio::test]
    async fn test_search_surfaces_api_error_description() {
        let mock_server = MockServer::start().await;
        let client = EventsClient::with_base_url("expired", mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "status_code": 401,
                "error": "INVALID_AUTH",
                "error_description": "The OAuth token you provided was invalid."
            })))
            .mount(&mock_server)
            .await;

        let result = client.search(0.0, 0.0).await;
        match result {
            Err(UpstreamError::Api { code, message }) => {
                assert_eq!(code, 401);
                assert_eq!(message, "The OAuth token you provided was invalid.");
            }
            other => panic!("Expected Api error, got {:?}", other.map(|_| ())),
        }
    }
}
