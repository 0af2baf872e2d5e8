//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::theme::{Platform, Theme};

/// Current conditions merged with the place they were looked up for
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    pub city: String,
    pub region: String,
    pub country: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// km/h
    pub wind_speed: f64,
}

/// The two screens of the navigation shell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Tab {
    #[default]
    Weather,
    Explore,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Weather, Tab::Explore];

    /// Route name of the screen behind the tab
    pub const fn route(self) -> &'static str {
        match self {
            Tab::Weather => "index",
            Tab::Explore => "explore",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Tab::Weather => "Weather",
            Tab::Explore => "Explore",
        }
    }

    /// Icon identifier; the outline variant is used while the tab is inactive
    pub const fn icon(self, focused: bool) -> &'static str {
        match (self, focused) {
            (Tab::Weather, true) => "cloud",
            (Tab::Weather, false) => "cloud-outline",
            (Tab::Explore, true) => "map",
            (Tab::Explore, false) => "map-outline",
        }
    }

    /// Terminal glyph drawn for [`Tab::icon`]
    pub fn glyph(self, focused: bool) -> &'static str {
        match self.icon(focused) {
            "cloud" => "\u{25cf}",
            "cloud-outline" => "\u{25cb}",
            "map" => "\u{25c6}",
            "map-outline" => "\u{25c7}",
            _ => " ",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Weather => Tab::Explore,
            Tab::Explore => Tab::Weather,
        }
    }
}

/// Spinner timing for the submit indicator.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = [
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}",
    "\u{2827}", "\u{2807}", "\u{280f}",
];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Navigation", label = "Tab", debug_fmt)]
    pub tab: Tab,

    /// Appearance passed down to the rendering layer
    #[debug(section = "Navigation", label = "Theme", debug_fmt)]
    pub theme: Theme,

    #[debug(section = "Navigation", label = "Platform", debug_fmt)]
    pub platform: Platform,

    /// Text in the search input
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    #[debug(section = "Search", label = "Input focused")]
    pub input_focused: bool,

    /// Bumped on every accepted submit; results from older searches are dropped
    #[debug(section = "Search", label = "Generation")]
    pub search_generation: u64,

    /// Lookup lifecycle: Empty (idle) → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Reading", debug_fmt)]
    pub weather: DataResource<WeatherReading>,

    /// Spinner frame counter, only advanced while loading
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(theme: Theme, platform: Platform) -> Self {
        Self {
            tab: Tab::default(),
            theme,
            platform,
            query: String::new(),
            input_focused: true,
            search_generation: 0,
            weather: DataResource::Empty,
            tick_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Platform::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_routes_and_icons() {
        assert_eq!(Tab::Weather.route(), "index");
        assert_eq!(Tab::Explore.route(), "explore");
        assert_eq!(Tab::Weather.icon(true), "cloud");
        assert_eq!(Tab::Weather.icon(false), "cloud-outline");
        assert_eq!(Tab::Explore.icon(true), "map");
        assert_eq!(Tab::Explore.icon(false), "map-outline");

        let glyphs: Vec<_> = Tab::ALL
            .into_iter()
            .flat_map(|tab| [tab.glyph(true), tab.glyph(false)])
            .collect();
        assert_eq!(glyphs, ["\u{25cf}", "\u{25cb}", "\u{25c6}", "\u{25c7}"]);
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = AppState::default();
        state.tick_count = SPINNER_FRAMES.len() as u32;
        assert_eq!(state.spinner_frame(), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = AppState::default();
        assert!(state.weather.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.tab, Tab::Weather);
        assert!(state.input_focused);
    }
}
