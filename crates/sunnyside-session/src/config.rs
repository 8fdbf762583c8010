//! Session configuration.

use serde::{Deserialize, Serialize};
use sunnyside_engine::MeasurementUnit;

use crate::types::LocationSelection;

/// Settings the session starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Measurement unit preference.
    #[serde(default)]
    pub unit: MeasurementUnit,

    /// Location used when device geolocation is denied or unavailable.
    pub fallback_location: LocationSelection,

    /// Daily forecast horizon requested from the provider.
    pub forecast_days: u8,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Fahrenheit,
            fallback_location: LocationSelection::new(40.7128, -74.006, "New York, NY"),
            forecast_days: 10,
            request_timeout_secs: 10,
        }
    }
}
