//! WMO weather code descriptors.
//!
//! A fixed, immutable association from the Open-Meteo weather code
//! vocabulary to presentation-ready copy. Codes outside the vocabulary
//! resolve to a rainbow fallback rather than an error.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Presentation-ready description of a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherDescriptor {
    /// Short condition name, e.g. "Partly Cloudy".
    pub label: &'static str,
    /// Emoji glyph for the condition.
    pub icon: &'static str,
    /// Upbeat one-liner shown alongside the condition.
    pub optimistic: &'static str,
    /// CSS background gradient matching the condition's mood.
    pub background: &'static str,
}

const fn entry(
    label: &'static str,
    icon: &'static str,
    optimistic: &'static str,
    background: &'static str,
) -> WeatherDescriptor {
    WeatherDescriptor {
        label,
        icon,
        optimistic,
        background,
    }
}

/// Descriptor for codes outside the known vocabulary.
pub const UNKNOWN: WeatherDescriptor = entry(
    "Unknown",
    "🌈",
    "The sky is doing something unique today! How exciting.",
    "linear-gradient(135deg, #a29bfe 0%, #fd79a8 100%)",
);

/// Look up the descriptor for a WMO weather code.
///
/// Total over all integers; unknown codes yield [`UNKNOWN`].
pub fn describe(code: i32) -> WeatherDescriptor {
    match code {
        0 => entry(
            "Clear Sky",
            "☀️",
            "Perfect sunshine! The sky is giving you its best today.",
            "linear-gradient(135deg, #FFB347 0%, #FFCC33 50%, #FFF8DC 100%)",
        ),
        1 => entry(
            "Mainly Clear",
            "🌤️",
            "Almost entirely clear — just a few artistic clouds for character!",
            "linear-gradient(135deg, #FFB347 0%, #87CEEB 100%)",
        ),
        2 => entry(
            "Partly Cloudy",
            "⛅",
            "Natural sun-shade included! Built-in UV protection today.",
            "linear-gradient(135deg, #87CEEB 0%, #B0C4DE 100%)",
        ),
        3 => entry(
            "Overcast",
            "☁️",
            "Cozy blanket sky — perfect lighting for photos! No squinting required.",
            "linear-gradient(135deg, #B0C4DE 0%, #A9B8C9 100%)",
        ),
        45 => entry(
            "Fog",
            "🌫️",
            "Mystery atmosphere unlocked! The world looks like a movie set.",
            "linear-gradient(135deg, #C9D6DF 0%, #E2E8F0 100%)",
        ),
        48 => entry(
            "Rime Fog",
            "🌫️",
            "Nature's glitter! Everything gets a magical frosty sparkle.",
            "linear-gradient(135deg, #E2E8F0 0%, #F0F4F8 100%)",
        ),
        51 => entry(
            "Light Drizzle",
            "🌦️",
            "Free mist facial! Your skin will thank you.",
            "linear-gradient(135deg, #74b9ff 0%, #a29bfe 100%)",
        ),
        53 => entry(
            "Moderate Drizzle",
            "🌦️",
            "Gentle sky-watering — gardens are cheering right now!",
            "linear-gradient(135deg, #74b9ff 0%, #6c5ce7 100%)",
        ),
        55 => entry(
            "Dense Drizzle",
            "🌧️",
            "Maximum cozy-inside energy. Hot cocoa weather activated!",
            "linear-gradient(135deg, #636e72 0%, #6c5ce7 100%)",
        ),
        61 => entry(
            "Slight Rain",
            "🌧️",
            "A light rinse for everything! The world will look brand new after.",
            "linear-gradient(135deg, #74b9ff 0%, #0984e3 100%)",
        ),
        63 => entry(
            "Moderate Rain",
            "🌧️",
            "Puddle-jumping weather! Free car wash included.",
            "linear-gradient(135deg, #0984e3 0%, #6c5ce7 100%)",
        ),
        65 => entry(
            "Heavy Rain",
            "🌧️",
            "Maximum nature hydration! Umbrella fashion show opportunity.",
            "linear-gradient(135deg, #2d3436 0%, #0984e3 100%)",
        ),
        71 => entry(
            "Slight Snow",
            "❄️",
            "Sugar-dusting from the sky! Everything gets a sparkly makeover.",
            "linear-gradient(135deg, #dfe6e9 0%, #b2bec3 100%)",
        ),
        73 => entry(
            "Moderate Snow",
            "🌨️",
            "Snowperson building conditions: IDEAL. Get out there!",
            "linear-gradient(135deg, #b2bec3 0%, #636e72 100%)",
        ),
        75 => entry(
            "Heavy Snow",
            "🌨️",
            "Winter wonderland MAXIMUM! Snow day energy is off the charts.",
            "linear-gradient(135deg, #636e72 0%, #2d3436 100%)",
        ),
        77 => entry(
            "Snow Grains",
            "🌨️",
            "Tiny ice confetti! Nature is celebrating something.",
            "linear-gradient(135deg, #dfe6e9 0%, #74b9ff 100%)",
        ),
        80 => entry(
            "Slight Showers",
            "🌦️",
            "Quick refresher from the sky — it'll be over before you know it!",
            "linear-gradient(135deg, #74b9ff 0%, #FFB347 100%)",
        ),
        81 => entry(
            "Moderate Showers",
            "🌧️",
            "Nature's power wash in action! Rainbows are loading…",
            "linear-gradient(135deg, #0984e3 0%, #a29bfe 100%)",
        ),
        82 => entry(
            "Violent Showers",
            "⛈️",
            "Sky is going ALL OUT! Maximum dramatic vibes. Stay cozy inside.",
            "linear-gradient(135deg, #2d3436 0%, #6c5ce7 100%)",
        ),
        85 => entry(
            "Slight Snow Showers",
            "🌨️",
            "Quick snow sprinkle! Like the sky is decorating a cake.",
            "linear-gradient(135deg, #dfe6e9 0%, #74b9ff 100%)",
        ),
        86 => entry(
            "Heavy Snow Showers",
            "🌨️",
            "Full snow globe mode activated! Absolutely magical out there.",
            "linear-gradient(135deg, #636e72 0%, #dfe6e9 100%)",
        ),
        95 => entry(
            "Thunderstorm",
            "⛈️",
            "Free light show! Nature's fireworks display — enjoy from inside.",
            "linear-gradient(135deg, #2d3436 0%, #e17055 100%)",
        ),
        96 => entry(
            "Thunderstorm + Hail",
            "⛈️",
            "Ultimate indoor day! Sky is doing its most dramatic performance.",
            "linear-gradient(135deg, #2d3436 0%, #d63031 100%)",
        ),
        99 => entry(
            "Thunderstorm + Heavy Hail",
            "⛈️",
            "Nature's percussion concert! Fort-building conditions are PERFECT.",
            "linear-gradient(135deg, #2d3436 0%, #d63031 100%)",
        ),
        _ => UNKNOWN,
    }
}

/// Every code present in the descriptor table, for exhaustive checks.
pub const KNOWN_CODES: &[i32] = &[
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99,
];
