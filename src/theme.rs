//! Tab bar palette and per-platform tab bar styling.
//!
//! The theme is an explicit value carried in state and passed down through
//! component props; nothing here reads a process-wide appearance setting.

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the tab bar for a given theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabPalette {
    pub active: Color,
    pub inactive: Color,
    pub background: Color,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn palette(self) -> TabPalette {
        match self {
            Theme::Light => TabPalette {
                active: Color::Rgb(0x00, 0x7A, 0xFF),
                inactive: Color::Rgb(0x68, 0x70, 0x76),
                background: Color::Rgb(0xFF, 0xFF, 0xFF),
            },
            Theme::Dark => TabPalette {
                active: Color::Rgb(0xFF, 0xFF, 0xFF),
                inactive: Color::Rgb(0x9B, 0xA1, 0xA6),
                background: Color::Rgb(0x15, 0x17, 0x18),
            },
        }
    }
}

/// Platform family, which decides how the tab bar sits over content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Apple,
    #[default]
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }
}

/// Where the tab bar is placed relative to the screen content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabBarPosition {
    /// Drawn over the last row of the content area
    Absolute,
    /// Gets its own row below the content
    Docked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabBarStyle {
    pub position: TabBarPosition,
    pub background: Option<Color>,
}

pub fn tab_bar_style(platform: Platform, theme: Theme) -> TabBarStyle {
    match platform {
        Platform::Apple => TabBarStyle {
            position: TabBarPosition::Absolute,
            background: Some(theme.palette().background),
        },
        Platform::Other => TabBarStyle {
            position: TabBarPosition::Docked,
            background: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette() {
        let palette = Theme::Light.palette();
        assert_eq!(palette.active, Color::Rgb(0x00, 0x7A, 0xFF));
        assert_eq!(palette.inactive, Color::Rgb(0x68, 0x70, 0x76));
    }

    #[test]
    fn test_dark_palette() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.active, Color::Rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(palette.inactive, Color::Rgb(0x9B, 0xA1, 0xA6));
        assert_eq!(palette.background, Color::Rgb(0x15, 0x17, 0x18));
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_apple_tab_bar_is_absolute_with_theme_background() {
        let style = tab_bar_style(Platform::Apple, Theme::Dark);
        assert_eq!(style.position, TabBarPosition::Absolute);
        assert_eq!(style.background, Some(Color::Rgb(0x15, 0x17, 0x18)));
    }

    #[test]
    fn test_other_tab_bar_is_docked_without_background() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tab_bar_style(Platform::Other, theme);
            assert_eq!(style.position, TabBarPosition::Docked);
            assert_eq!(style.background, None);
        }
    }
}
