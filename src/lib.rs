//! Clima - two-tab weather lookup TUI over Open-Meteo
//!
//! The library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod condition;
pub mod effect;
pub mod logging;
pub mod lookup;
pub mod reducer;
pub mod state;
pub mod theme;
