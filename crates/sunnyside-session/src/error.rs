//! Session error types.

use thiserror::Error;

/// Device geolocation errors.
///
/// Non-fatal: the session falls back to its configured default location.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location service unavailable")]
    ServiceUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location error: {0}")]
    Other(String),
}

/// Errors surfaced by the forecast session.
///
/// All of these are recoverable: the session stays usable and a new search
/// or unit toggle retries.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Geocoding ran fine but matched nothing.
    #[error("Location not found: {0}")]
    SearchNotFound(String),

    /// Transport or parse failure while searching.
    #[error("Search failed: {0}")]
    SearchFailed(String),

    /// Transport or parse failure while fetching the forecast.
    #[error("Forecast fetch failed: {0}")]
    FetchFailed(String),
}

impl SessionError {
    /// User-friendly message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::SearchNotFound(_) => "Location not found — try another search!".to_string(),
            Self::SearchFailed(_) => "Search hiccup! Try again.".to_string(),
            Self::FetchFailed(cause) => format!(
                "Couldn't fetch the weather — but we're sure it's beautiful out there! {cause}"
            ),
        }
    }
}
