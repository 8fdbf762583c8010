//! Forecast session controller for Sunnyside.
//!
//! Resolves a location (device geolocation, fallback, or text search via
//! the Open-Meteo geocoding API), fetches a 10-day daily + hourly forecast
//! from Open-Meteo, and owns the resulting state for the presentation
//! layer. The pure interpretation of the fetched values lives in
//! `sunnyside-engine`.

pub mod config;
pub mod error;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod session;
pub mod types;

pub use config::SessionConfig;
pub use error::{LocationError, SessionError};
pub use geocode::{GeocodedPlace, GeocodingClient};
pub use provider::ForecastProvider;
pub use session::{Session, Snapshot};
pub use types::{
    Coordinates, DailyForecast, ForecastData, HourlyForecast, LocationSelection, Phase,
};
