//! Forecast session controller.
//!
//! The session owns the current location, unit preference, forecast data
//! and lifecycle phase, and is their sole writer. Each successful fetch
//! replaces the forecast wholesale; observers see either the old data or
//! the new, never a mix. In-flight fetches are tagged with a monotonic id
//! so a response that lost the race to a newer request is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::instrument;

use sunnyside_engine::MeasurementUnit;

use crate::config::SessionConfig;
use crate::error::{LocationError, SessionError};
use crate::geocode::GeocodingClient;
use crate::location;
use crate::provider::ForecastProvider;
use crate::types::{Coordinates, ForecastData, LocationSelection, Phase};

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub location: LocationSelection,
    pub unit: MeasurementUnit,
    pub forecast: Option<ForecastData>,
    pub last_error: Option<String>,
}

#[derive(Debug)]
struct State {
    phase: Phase,
    location: LocationSelection,
    unit: MeasurementUnit,
    forecast: Option<ForecastData>,
    last_error: Option<String>,
}

#[derive(Debug)]
pub struct Session {
    provider: ForecastProvider,
    geocoder: GeocodingClient,
    state: RwLock<State>,
    fetch_seq: AtomicU64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let provider = ForecastProvider::new(&config)?;
        let geocoder = GeocodingClient::new()?;
        Ok(Self::assemble(config, provider, geocoder))
    }

    /// Tests point the clients at a mock server.
    #[cfg(test)]
    fn with_parts(config: SessionConfig, provider: ForecastProvider, geocoder: GeocodingClient) -> Self {
        Self::assemble(config, provider, geocoder)
    }

    fn assemble(
        config: SessionConfig,
        provider: ForecastProvider,
        geocoder: GeocodingClient,
    ) -> Self {
        Self {
            provider,
            geocoder,
            state: RwLock::new(State {
                phase: Phase::Idle,
                location: config.fallback_location,
                unit: config.unit,
                forecast: None,
                last_error: None,
            }),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Resolve the initial location and fetch its forecast.
    ///
    /// Geolocation is attempted exactly once per session; denial or
    /// unavailability falls back to the configured default location.
    pub async fn start(&self) {
        self.start_with(location::current().await).await;
    }

    /// Start from an already-resolved geolocation attempt.
    pub async fn start_with(&self, position: Result<Coordinates, LocationError>) {
        let selection = match position {
            Ok(coords) => LocationSelection {
                coords,
                display_name: "Your Location".to_string(),
            },
            Err(e) => {
                let fallback = self.state.read().location.clone();
                tracing::info!(
                    "geolocation unavailable ({e}), falling back to {}",
                    fallback.display_name
                );
                fallback
            }
        };
        self.fetch_forecast(selection).await;
    }

    /// Search for a location by name and, on a hit, fetch its forecast.
    ///
    /// Empty or whitespace-only queries are a no-op. A miss or a transport
    /// failure leaves the current forecast and phase untouched; only the
    /// error message changes.
    ///
    /// # Errors
    ///
    /// [`SessionError::SearchNotFound`] when nothing matches,
    /// [`SessionError::SearchFailed`] on transport or parse failure.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &str) -> Result<(), SessionError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let found = match self.geocoder.search(query).await {
            Ok(found) => found,
            Err(e) => {
                self.note_error(&e);
                return Err(e);
            }
        };

        let Some(place) = found else {
            let e = SessionError::SearchNotFound(query.to_string());
            self.note_error(&e);
            return Err(e);
        };

        let selection = LocationSelection {
            coords: place.coordinates(),
            display_name: place.display_name(),
        };
        tracing::info!("search resolved to {}", selection.display_name);
        self.fetch_forecast(selection).await;
        Ok(())
    }

    /// Change the measurement unit.
    ///
    /// Triggers exactly one re-fetch for the last known location; never
    /// re-resolves geolocation. No-op when the unit is unchanged.
    pub async fn set_unit(&self, unit: MeasurementUnit) {
        let location = {
            let mut state = self.state.write();
            if state.unit == unit {
                return;
            }
            state.unit = unit;
            state.location.clone()
        };
        self.fetch_forecast(location).await;
    }

    /// Re-fetch the forecast for the current location and unit.
    pub async fn refresh(&self) {
        let location = self.state.read().location.clone();
        self.fetch_forecast(location).await;
    }

    pub fn phase(&self) -> Phase {
        self.state.read().phase
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.state.read().unit
    }

    pub fn location(&self) -> LocationSelection {
        self.state.read().location.clone()
    }

    pub fn forecast(&self) -> Option<ForecastData> {
        self.state.read().forecast.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read();
        Snapshot {
            phase: state.phase,
            location: state.location.clone(),
            unit: state.unit,
            forecast: state.forecast.clone(),
            last_error: state.last_error.clone(),
        }
    }

    async fn fetch_forecast(&self, selection: LocationSelection) {
        let fetch_id = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let unit = {
            let mut state = self.state.write();
            state.phase = Phase::Loading;
            state.last_error = None;
            state.location = selection.clone();
            state.unit
        };

        let result = self.provider.fetch(selection.coords, unit).await;

        let mut state = self.state.write();
        if self.fetch_seq.load(Ordering::SeqCst) != fetch_id {
            // A newer fetch superseded this one while it was in flight.
            tracing::debug!(fetch_id, "discarding stale forecast response");
            return;
        }

        match result {
            Ok(data) => {
                tracing::info!(
                    days = data.daily.len(),
                    hours = data.hourly.len(),
                    location = %selection.display_name,
                    "forecast updated"
                );
                state.forecast = Some(data);
                state.phase = Phase::Ready;
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!("forecast fetch failed: {e}");
                // previous forecast data stays readable
                state.phase = Phase::Failed;
                state.last_error = Some(e.user_message());
            }
        }
    }

    fn note_error(&self, e: &SessionError) {
        tracing::warn!("{e}");
        self.state.write().last_error = Some(e.user_message());
    }
}
