//! Pure weather interpretation engine for Sunnyside.
//!
//! Maps raw Open-Meteo values (WMO weather codes, precipitation chances,
//! temperatures, wind speeds, UV indices) into upbeat presentation-ready
//! descriptors. Every function is a pure function of its arguments: no I/O,
//! no state, safe to call concurrently from any number of callers.

pub mod category;
pub mod dates;
pub mod descriptor;
pub mod reframe;
pub mod unit;

pub use category::{classify, WeatherCategory};
pub use descriptor::{describe, WeatherDescriptor};
pub use reframe::{PrecipOutlook, TempVibe, UvOutlook, Vibe};
pub use unit::MeasurementUnit;
