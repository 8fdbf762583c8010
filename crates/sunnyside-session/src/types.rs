use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The location the session is currently showing weather for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub coords: Coordinates,
    pub display_name: String,
}

impl LocationSelection {
    pub fn new(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
            display_name: display_name.into(),
        }
    }
}

/// One day of the forecast. Immutable once constructed; the whole daily
/// sequence is replaced on each successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// WMO weather code.
    pub code: i32,
    pub high: f64,
    pub low: f64,
    /// Precipitation probability, 0..=100.
    pub precip_chance: u8,
    pub wind_max: f64,
    pub uv_max: f64,
    /// Local time at the forecast location.
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// One hour of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local time at the forecast location.
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub precip_chance: u8,
    pub code: i32,
}

/// A complete normalized forecast: ordered daily and hourly sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastData {
    /// Rolling next-24-hours window: hourly entries no older than one hour
    /// before `now`, first 24 in chronological order. Not calendar-aligned.
    pub fn upcoming_hours(&self, now: NaiveDateTime) -> Vec<&HourlyForecast> {
        let cutoff = now - Duration::hours(1);
        self.hourly
            .iter()
            .filter(|h| h.time >= cutoff)
            .take(24)
            .collect()
    }

    /// The first (current) day, if any.
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn hourly_over(hours: impl Iterator<Item = NaiveDateTime>) -> ForecastData {
        ForecastData {
            daily: Vec::new(),
            hourly: hours
                .map(|time| HourlyForecast {
                    time,
                    temperature: 60.0,
                    precip_chance: 10,
                    code: 1,
                })
                .collect(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_upcoming_hours_is_a_rolling_window() {
        // 48 hours starting at midnight on the 6th
        let start = hour(6, 0);
        let data = hourly_over((0..48).map(|i| start + Duration::hours(i)));

        // "now" is 10:30; entries from 09:30 on qualify, so 10:00 leads
        let now = hour(6, 10) + Duration::minutes(30);
        let window = data.upcoming_hours(now);
        assert_eq!(window.len(), 24);
        assert_eq!(window[0].time, hour(6, 10));
        assert_eq!(window[23].time, hour(7, 9));
    }

    #[test]
    fn test_upcoming_hours_includes_the_recent_past() {
        let start = hour(6, 0);
        let data = hourly_over((0..4).map(|i| start + Duration::hours(i)));

        // exactly one hour old still counts
        let window = data.upcoming_hours(hour(6, 1));
        assert_eq!(window[0].time, hour(6, 0));
    }

    #[test]
    fn test_upcoming_hours_short_horizon() {
        let start = hour(6, 0);
        let data = hourly_over((0..6).map(|i| start + Duration::hours(i)));
        assert_eq!(data.upcoming_hours(hour(6, 0)).len(), 6);
    }
}
