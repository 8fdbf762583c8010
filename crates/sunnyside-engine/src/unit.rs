use serde::{Deserialize, Serialize};

/// Measurement unit preference.
///
/// A single selection drives both the temperature unit and the paired
/// wind-speed unit (mph with Fahrenheit, km/h with Celsius). The forecast
/// provider performs the conversion, so changing the unit means re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl MeasurementUnit {
    /// Display symbol for temperatures.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }

    /// `temperature_unit` query value understood by Open-Meteo.
    pub fn temperature_param(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit",
            Self::Celsius => "celsius",
        }
    }

    /// `wind_speed_unit` query value understood by Open-Meteo.
    pub fn wind_speed_param(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "mph",
            Self::Celsius => "kmh",
        }
    }

    /// Display label for wind speeds.
    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "mph",
            Self::Celsius => "km/h",
        }
    }

    /// The other unit.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }
}
