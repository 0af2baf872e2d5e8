//! Actions: user intents, lookup results, and global ticks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Tab, WeatherReading};

/// Payload of a settled lookup that produced a reading
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LookupSuccess {
    pub generation: u64,
    /// Trimmed query the lookup was issued for
    pub query: String,
    pub reading: WeatherReading,
}

/// Payload of a failed lookup; `message` is already user-facing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LookupFailure {
    pub generation: u64,
    pub message: String,
}

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Input text changed
    SearchQueryChange(String),

    /// Give the search input keyboard focus
    SearchFocus,

    /// Release keyboard focus from the search input
    SearchBlur,

    /// Submit the raw input text (trimmed by the reducer)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Result: both lookup stages succeeded
    WeatherDidLoad(LookupSuccess),

    /// Result: lookup failed
    WeatherDidError(LookupFailure),

    // ===== Tab category =====
    /// Jump to a specific tab
    TabSelect(Tab),

    /// Cycle to the next tab
    TabNext,

    // ===== UI category =====
    /// Switch between light and dark tab palettes
    UiToggleTheme,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
