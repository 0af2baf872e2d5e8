pub mod app_shell;
pub mod explore_screen;
pub mod search_input;
pub mod tab_bar;
pub mod weather_card;
pub mod weather_screen;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_shell::{AppShell, AppShellProps};
pub use explore_screen::{ExploreScreen, ExploreScreenProps};
pub use search_input::{SearchInput, SearchInputProps};
pub use tab_bar::{TabBar, TabBarProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_screen::{ERROR_ICON, WeatherScreen, WeatherScreenProps};
