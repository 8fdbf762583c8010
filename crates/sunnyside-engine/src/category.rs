//! Weather code categorization.

use serde::Serialize;

/// Coarse weather category derived from a WMO code.
///
/// Used to group codes for reframed copy ("chance of no rain").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Thunderstorm,
    Snow,
    Drizzle,
    Rain,
    Fog,
}

const THUNDERSTORM_CODES: &[i32] = &[95, 96, 99];
const SNOW_CODES: &[i32] = &[71, 73, 75, 77, 85, 86];
const DRIZZLE_CODES: &[i32] = &[51, 53, 55];
const RAIN_CODES: &[i32] = &[61, 63, 65, 80, 81, 82];
const FOG_CODES: &[i32] = &[45, 48];

/// Classify a WMO weather code into a category.
///
/// Membership sets are tested in a fixed priority order (thunderstorm,
/// snow, drizzle, rain, fog); anything unmatched is treated as rain.
pub fn classify(code: i32) -> WeatherCategory {
    if THUNDERSTORM_CODES.contains(&code) {
        return WeatherCategory::Thunderstorm;
    }
    if SNOW_CODES.contains(&code) {
        return WeatherCategory::Snow;
    }
    if DRIZZLE_CODES.contains(&code) {
        return WeatherCategory::Drizzle;
    }
    if RAIN_CODES.contains(&code) {
        return WeatherCategory::Rain;
    }
    if FOG_CODES.contains(&code) {
        return WeatherCategory::Fog;
    }
    WeatherCategory::Rain
}

impl WeatherCategory {
    /// Lowercase name used inside reframed sentences.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Fog => "fog",
        }
    }

    /// Word for a single unit of the stuff coming down.
    pub fn falling_word(&self) -> &'static str {
        match self {
            Self::Snow => "snowflake",
            _ => "drop",
        }
    }
}
