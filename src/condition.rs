//! Weather code → display style

use ratatui::style::Color;

/// Icon shown for a condition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    PartlySunny,
    Rainy,
    Thunderstorm,
    Cloud,
}

impl WeatherIcon {
    /// Stable icon identifier
    pub const fn name(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::PartlySunny => "partly-sunny",
            WeatherIcon::Rainy => "rainy",
            WeatherIcon::Thunderstorm => "thunderstorm",
            WeatherIcon::Cloud => "cloud",
        }
    }

    /// Terminal glyph for the icon
    pub const fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "\u{2600}\u{fe0f}",
            WeatherIcon::PartlySunny => "\u{26c5}",
            WeatherIcon::Rainy => "\u{1f327}\u{fe0f}",
            WeatherIcon::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionStyle {
    pub icon: WeatherIcon,
    pub color: Color,
    pub label: &'static str,
}

const SUNNY: ConditionStyle = ConditionStyle {
    icon: WeatherIcon::Sunny,
    color: Color::Rgb(0xFF, 0xD7, 0x00),
    label: "Sunny",
};

const CLOUDY: ConditionStyle = ConditionStyle {
    icon: WeatherIcon::PartlySunny,
    color: Color::Rgb(0xA9, 0xA9, 0xA9),
    label: "Cloudy",
};

const RAINY: ConditionStyle = ConditionStyle {
    icon: WeatherIcon::Rainy,
    color: Color::Rgb(0x46, 0x82, 0xB4),
    label: "Rainy",
};

const STORMY: ConditionStyle = ConditionStyle {
    icon: WeatherIcon::Thunderstorm,
    color: Color::Rgb(0x8A, 0x2B, 0xE2),
    label: "Stormy",
};

const VARIABLE: ConditionStyle = ConditionStyle {
    icon: WeatherIcon::Cloud,
    color: Color::Rgb(0x7F, 0x8C, 0x8D),
    label: "Variable",
};

/// Map a WMO weather code to its display style.
///
/// Only a handful of codes are recognized; every other value, including
/// negative ones, falls back to the "Variable" style.
pub const fn condition_style(code: i32) -> ConditionStyle {
    match code {
        0 => SUNNY,
        1..=3 => CLOUDY,
        51 | 61 | 80 => RAINY,
        95 | 96 | 99 => STORMY,
        _ => VARIABLE,
    }
}

/// Recognized code groups in display order, ending with the fallback row.
const LEGEND: [(&str, ConditionStyle); 5] = [
    ("0", SUNNY),
    ("1, 2, 3", CLOUDY),
    ("51, 61, 80", RAINY),
    ("95, 96, 99", STORMY),
    ("other", VARIABLE),
];

impl ConditionStyle {
    /// Rows shown on the Explore tab
    pub fn legend() -> &'static [(&'static str, ConditionStyle)] {
        &LEGEND
    }
}
