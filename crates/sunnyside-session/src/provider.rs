//! Open-Meteo forecast client.
//!
//! Issues one GET per fetch and normalizes the provider's parallel-array
//! JSON into ordered [`DailyForecast`] and [`HourlyForecast`] records.
//! Free, no API key required.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use sunnyside_engine::MeasurementUnit;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::types::{Coordinates, DailyForecast, ForecastData, HourlyForecast};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,wind_speed_10m_max,uv_index_max,sunrise,sunset";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,weather_code";

// Open-Meteo emits local timestamps without seconds, e.g. "2026-03-06T07:12".
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct ForecastProvider {
    client: Client,
    base_url: String,
    forecast_days: u8,
}

impl ForecastProvider {
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        Self::build(
            FORECAST_URL,
            config.forecast_days,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Result<Self, SessionError> {
        Self::build(base_url, 10, Duration::from_secs(10))
    }

    fn build(base_url: &str, forecast_days: u8, timeout: Duration) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SessionError::FetchFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            forecast_days,
        })
    }

    /// Fetch the daily + hourly forecast for `coords`, denominated in `unit`.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(
        &self,
        coords: Coordinates,
        unit: MeasurementUnit,
    ) -> Result<ForecastData, SessionError> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("temperature_unit", unit.temperature_param().to_string()),
                ("wind_speed_unit", unit.wind_speed_param().to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
            ],
        )
        .map_err(|e| SessionError::FetchFailed(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SessionError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SessionError::FetchFailed(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| SessionError::FetchFailed(format!("JSON parse error: {e}")))?;

        Ok(body.normalize())
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
    hourly: HourlyBlock,
}

/// Parallel arrays keyed by field name, one cell per day.
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_probability_max: Vec<Option<u8>>,
    wind_speed_10m_max: Vec<Option<f64>>,
    uv_index_max: Vec<Option<f64>>,
    sunrise: Vec<Option<String>>,
    sunset: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<u8>>,
    weather_code: Vec<Option<i32>>,
}

fn cell<T: Copy>(column: &[Option<T>], index: usize) -> Option<T> {
    column.get(index).copied().flatten()
}

fn timestamp(column: &[Option<String>], index: usize) -> Option<NaiveDateTime> {
    let raw = column.get(index)?.as_deref()?;
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

impl ForecastResponse {
    /// Zip the parallel arrays into ordered records. Rows with missing
    /// cells are dropped rather than failing the whole fetch.
    fn normalize(self) -> ForecastData {
        let d = &self.daily;
        let mut daily = Vec::with_capacity(d.time.len());
        for (i, &date) in d.time.iter().enumerate() {
            let row = (
                cell(&d.weather_code, i),
                cell(&d.temperature_2m_max, i),
                cell(&d.temperature_2m_min, i),
                cell(&d.precipitation_probability_max, i),
                cell(&d.wind_speed_10m_max, i),
                cell(&d.uv_index_max, i),
                timestamp(&d.sunrise, i),
                timestamp(&d.sunset, i),
            );
            match row {
                (
                    Some(code),
                    Some(high),
                    Some(low),
                    Some(precip_chance),
                    Some(wind_max),
                    Some(uv_max),
                    Some(sunrise),
                    Some(sunset),
                ) => daily.push(DailyForecast {
                    date,
                    code,
                    high,
                    low,
                    precip_chance,
                    wind_max,
                    uv_max,
                    sunrise,
                    sunset,
                }),
                _ => tracing::warn!(day = %date, "skipping daily row with missing cells"),
            }
        }

        let h = &self.hourly;
        let mut hourly = Vec::with_capacity(h.time.len());
        for (i, raw_time) in h.time.iter().enumerate() {
            let time = NaiveDateTime::parse_from_str(raw_time, TIMESTAMP_FORMAT).ok();
            match (
                time,
                cell(&h.temperature_2m, i),
                cell(&h.precipitation_probability, i),
                cell(&h.weather_code, i),
            ) {
                (Some(time), Some(temperature), Some(precip_chance), Some(code)) => {
                    hourly.push(HourlyForecast {
                        time,
                        temperature,
                        precip_chance,
                        code,
                    });
                }
                _ => tracing::warn!(hour = %raw_time, "skipping hourly row with missing cells"),
            }
        }

        ForecastData {
            daily,
            hourly,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_body() -> serde_json::Value {
        json!({
            "daily": {
                "time": ["2026-03-06", "2026-03-07"],
                "weather_code": [61, 0],
                "temperature_2m_max": [58.3, 64.0],
                "temperature_2m_min": [41.2, 45.5],
                "precipitation_probability_max": [55, 5],
                "wind_speed_10m_max": [12.4, 7.1],
                "uv_index_max": [3.2, 5.8],
                "sunrise": ["2026-03-06T06:31", "2026-03-07T06:29"],
                "sunset": ["2026-03-06T17:52", "2026-03-07T17:53"]
            },
            "hourly": {
                "time": ["2026-03-06T00:00", "2026-03-06T01:00", "2026-03-06T02:00"],
                "temperature_2m": [44.0, 43.1, 42.7],
                "precipitation_probability": [10, 20, 25],
                "weather_code": [2, 3, 61]
            }
        })
    }

    async fn provider_for(server: &MockServer) -> ForecastProvider {
        ForecastProvider::with_base_url(&format!("{}/v1/forecast", server.uri())).unwrap()
    }

    fn nyc() -> Coordinates {
        Coordinates {
            latitude: 40.7128,
            longitude: -74.006,
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "40.7128"))
            .and(query_param("longitude", "-74.006"))
            .and(query_param("daily", DAILY_FIELDS))
            .and(query_param("hourly", HOURLY_FIELDS))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("wind_speed_unit", "mph"))
            .and(query_param("timezone", "auto"))
            .and(query_param("forecast_days", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let data = provider
            .fetch(nyc(), MeasurementUnit::Fahrenheit)
            .await
            .unwrap();

        assert_eq!(data.daily.len(), 2);
        assert_eq!(data.hourly.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_normalizes_parallel_arrays() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let data = provider
            .fetch(nyc(), MeasurementUnit::Fahrenheit)
            .await
            .unwrap();

        let first = &data.daily[0];
        assert_eq!(first.code, 61);
        assert_eq!(first.high, 58.3);
        assert_eq!(first.precip_chance, 55);
        assert_eq!(first.sunrise.format("%H:%M").to_string(), "06:31");

        // daily stays date-ascending, hourly time-ascending
        assert!(data.daily[0].date < data.daily[1].date);
        assert!(data.hourly[0].time < data.hourly[1].time);
        assert_eq!(data.hourly[2].code, 61);
    }

    #[tokio::test]
    async fn test_fetch_celsius_switches_both_units() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("temperature_unit", "celsius"))
            .and(query_param("wind_speed_unit", "kmh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        provider
            .fetch(nyc(), MeasurementUnit::Celsius)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fetch_skips_rows_with_missing_cells() {
        let server = MockServer::start().await;
        let mut body = sample_body();
        body["daily"]["uv_index_max"] = json!([null, 5.8]);
        body["hourly"]["temperature_2m"] = json!([44.0, null, 42.7]);

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let data = provider
            .fetch(nyc(), MeasurementUnit::Fahrenheit)
            .await
            .unwrap();

        assert_eq!(data.daily.len(), 1);
        assert_eq!(data.daily[0].code, 0);
        assert_eq!(data.hourly.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let err = provider
            .fetch(nyc(), MeasurementUnit::Fahrenheit)
            .await
            .unwrap_err();

        match err {
            SessionError::FetchFailed(msg) => assert!(msg.contains("503")),
            other => panic!("expected FetchFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let err = provider
            .fetch(nyc(), MeasurementUnit::Fahrenheit)
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::FetchFailed(_)));
    }
}
