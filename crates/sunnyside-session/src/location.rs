//! One-shot device geolocation.
//!
//! No platform position backend is wired in this build, so requests report
//! `ServiceUnavailable` and callers take the configured fallback location.

use crate::error::LocationError;
use crate::types::Coordinates;

/// Request the device position once.
pub async fn current() -> Result<Coordinates, LocationError> {
    Err(LocationError::ServiceUnavailable)
}

/// Whether a geolocation backend is available.
pub async fn is_available() -> bool {
    false
}
