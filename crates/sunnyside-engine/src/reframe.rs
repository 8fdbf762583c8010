//! Optimistic reframing of raw forecast numbers.
//!
//! Each function flips a raw value into its brightest defensible reading.
//! The central trick is the dry chance: 100 minus the precipitation
//! probability, so "40% chance of rain" becomes "60% chance of no rain".
//! Band boundaries are load-bearing; the tests pin every edge.

use serde::Serialize;

use crate::category::classify;
use crate::descriptor::describe;
use crate::unit::MeasurementUnit;

/// Enthusiasm level of a precipitation outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Legendary,
    Great,
    Hopeful,
    Adventurous,
    Determined,
    Embrace,
}

/// Reframed precipitation outlook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecipOutlook {
    pub text: String,
    pub emoji: &'static str,
    pub vibe: Vibe,
}

/// Flip a precipitation chance into a dry-chance outlook.
///
/// Bands on the dry chance, inclusive lower bounds: 90, 70, 50, 30, then
/// anything above zero. A certain-precipitation day (dry == 0) gets the
/// embrace message naming the category instead of a percentage.
pub fn precipitation(chance: u8, code: i32) -> PrecipOutlook {
    let dry = 100u8.saturating_sub(chance);
    let category = classify(code).label();
    let no_label = format!("no {category}");

    if dry >= 90 {
        PrecipOutlook {
            text: format!("{dry}% chance of {no_label}"),
            emoji: "😎",
            vibe: Vibe::Legendary,
        }
    } else if dry >= 70 {
        PrecipOutlook {
            text: format!("{dry}% chance of {no_label}"),
            emoji: "🌈",
            vibe: Vibe::Great,
        }
    } else if dry >= 50 {
        PrecipOutlook {
            text: format!("Still a {dry}% shot of {no_label}!"),
            emoji: "🤞",
            vibe: Vibe::Hopeful,
        }
    } else if dry >= 30 {
        PrecipOutlook {
            text: format!("{dry}% chance of {no_label} — timing is everything!"),
            emoji: "⏰",
            vibe: Vibe::Adventurous,
        }
    } else if dry > 0 {
        PrecipOutlook {
            text: format!("{dry}% window of {no_label} — you got this!"),
            emoji: "💪",
            vibe: Vibe::Determined,
        }
    } else {
        PrecipOutlook {
            text: format!("100% {category} — but hey, it's gonna be cozy!"),
            emoji: "🌱",
            vibe: Vibe::Embrace,
        }
    }
}

/// Icon shown for a forecast entry.
///
/// The sun wins whenever there is any dry chance at all; only certain
/// precipitation shows the code's own icon.
pub fn display_icon(chance: u8, code: i32) -> &'static str {
    let dry = 100u8.saturating_sub(chance);
    if dry > 0 {
        "☀️"
    } else {
        describe(code).icon
    }
}

/// Reframed temperature comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TempVibe {
    pub comment: &'static str,
    pub emoji: &'static str,
}

/// Reframe a temperature into a comment for its band.
///
/// Inclusive lower bounds: 85/70/55/35 °F or 29/21/13/2 °C; everything
/// colder lands in the open-ended cozy band.
pub fn temperature(temp: f64, unit: MeasurementUnit) -> TempVibe {
    let (hot, warm, cool, cold) = match unit {
        MeasurementUnit::Fahrenheit => (85.0, 70.0, 55.0, 35.0),
        MeasurementUnit::Celsius => (29.0, 21.0, 13.0, 2.0),
    };

    if temp >= hot {
        TempVibe {
            comment: "Perfect for the pool!",
            emoji: "🏖️",
        }
    } else if temp >= warm {
        TempVibe {
            comment: "Ideal vibes temperature!",
            emoji: "😊",
        }
    } else if temp >= cool {
        TempVibe {
            comment: "Perfect layers weather!",
            emoji: "🧣",
        }
    } else if temp >= cold {
        TempVibe {
            comment: "Crisp & refreshing!",
            emoji: "❄️",
        }
    } else {
        TempVibe {
            comment: "Maximum cozy season!",
            emoji: "🔥",
        }
    }
}

/// Reframe a wind speed into a comment.
///
/// Exclusive upper bounds at 5/15/25/40. Unit-agnostic: the caller supplies
/// the speed in whatever unit it is displaying.
pub fn wind(speed: f64) -> &'static str {
    if speed < 5.0 {
        "Barely a whisper — perfect hair day!"
    } else if speed < 15.0 {
        "Gentle breeze — nature's AC is on low."
    } else if speed < 25.0 {
        "Good kite-flying conditions!"
    } else if speed < 40.0 {
        "Dramatic scarf-blowing photo opportunity!"
    } else {
        "Hold onto your hat — adventure mode!"
    }
}

/// Reframed UV index reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UvOutlook {
    pub text: &'static str,
    pub color: &'static str,
}

/// Reframe a UV index. Inclusive upper bounds at 2/5/7.
pub fn uv(index: f64) -> UvOutlook {
    if index <= 2.0 {
        UvOutlook {
            text: "Low UV — no sunscreen stress!",
            color: "#4CAF50",
        }
    } else if index <= 5.0 {
        UvOutlook {
            text: "Moderate — quick tan potential!",
            color: "#FFB347",
        }
    } else if index <= 7.0 {
        UvOutlook {
            text: "High — vitamin D is charging fast!",
            color: "#FF8C00",
        }
    } else {
        UvOutlook {
            text: "Very high — hat & shade fashion time!",
            color: "#e17055",
        }
    }
}

/// Daily affirmation line chosen from the dry chance.
pub fn affirmation(chance: u8, code: i32) -> String {
    let dry = 100u8.saturating_sub(chance);
    let category = classify(code);
    if dry == 0 {
        format!(
            "Full {} day — but every {} brings us closer to sunshine! Cozy vibes win today.",
            category.label(),
            category.falling_word(),
        )
    } else if dry >= 70 {
        "The universe has basically cleared the sky for you today. Make it count!".to_string()
    } else {
        format!(
            "{dry}% chance of no {} — the sun is fighting for you!",
            category.label(),
        )
    }
}
