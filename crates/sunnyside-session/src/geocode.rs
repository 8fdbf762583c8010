//! Forward geocoding: resolve a searched place name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::error::SessionError;
use crate::types::Coordinates;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

/// Best geocoding match for a query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodedPlace {
    pub name: String,
    /// First-level administrative area (state, region), when known.
    pub admin1: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodedPlace {
    /// Joined display name, e.g. "Paris, Île-de-France, France".
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref() {
            parts.push(admin1);
        }
        if let Some(country) = self.country.as_deref() {
            parts.push(country);
        }
        parts.join(", ")
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl GeocodingClient {
    pub fn new() -> Result<Self, SessionError> {
        Self::build(GEOCODING_URL, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Result<Self, SessionError> {
        Self::build(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    fn build(base_url: &str, timeout: Duration) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SessionError::SearchFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// The single best match for `query`, or `Ok(None)` when nothing matches.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &str) -> Result<Option<GeocodedPlace>, SessionError> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[("name", query), ("count", "1"), ("language", "en")],
        )
        .map_err(|e| SessionError::SearchFailed(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SessionError::SearchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SessionError::SearchFailed(format!(
                "geocoder returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SessionError::SearchFailed(format!("JSON parse error: {e}")))?;

        Ok(body.results.unwrap_or_default().into_iter().next())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // The API omits the key entirely when there are no matches.
    results: Option<Vec<GeocodedPlace>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GeocodingClient {
        GeocodingClient::with_base_url(&format!("{}/v1/search", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_best_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Paris"))
            .and(query_param("count", "1"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "name": "Paris",
                    "admin1": "Île-de-France",
                    "country": "France",
                    "latitude": 48.8566,
                    "longitude": 2.3522
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let place = client.search("Paris").await.unwrap().unwrap();

        assert_eq!(place.display_name(), "Paris, Île-de-France, France");
        assert_eq!(place.coordinates().latitude, 48.8566);
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let server = MockServer::start().await;

        // no "results" key at all, as the live API does for a miss
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.5})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.search("zzzzzz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_search_empty_results_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.search("nowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.search("Paris").await.unwrap_err();
        assert!(matches!(err, SessionError::SearchFailed(_)));
    }

    #[test]
    fn test_display_name_skips_missing_fields() {
        let place = GeocodedPlace {
            name: "Singapore".into(),
            admin1: None,
            country: Some("Singapore".into()),
            latitude: 1.3521,
            longitude: 103.8198,
        };
        assert_eq!(place.display_name(), "Singapore, Singapore");

        let bare = GeocodedPlace {
            name: "Null Island".into(),
            admin1: None,
            country: None,
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(bare.display_name(), "Null Island");
    }
}
