//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::{Action, LookupFailure, LookupSuccess};
use crate::effect::Effect;
use crate::state::{AppState, Tab};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchFocus => {
            if state.input_focused && state.tab == Tab::Weather {
                return DispatchResult::unchanged();
            }
            state.tab = Tab::Weather;
            state.input_focused = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.input_focused {
                return DispatchResult::unchanged();
            }
            state.input_focused = false;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let query = raw.trim().to_string();
            // Blank input is ignored without surfacing an error.
            if query.is_empty() {
                return DispatchResult::unchanged();
            }

            state.query = raw;
            state.input_focused = false;
            state.search_generation = state.search_generation.wrapping_add(1);
            state.weather = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::LookupWeather {
                generation: state.search_generation,
                query,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(LookupSuccess {
            generation,
            query,
            reading,
        }) => {
            if generation != state.search_generation {
                tracing::debug!(
                    generation,
                    current = state.search_generation,
                    "dropping stale result"
                );
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(reading);
            state.query = query;
            DispatchResult::changed()
        }

        Action::WeatherDidError(LookupFailure {
            generation,
            message,
        }) => {
            if generation != state.search_generation {
                tracing::debug!(
                    generation,
                    current = state.search_generation,
                    "dropping stale error"
                );
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            DispatchResult::changed()
        }

        // ===== Tab actions =====
        Action::TabSelect(tab) => {
            if state.tab == tab {
                return DispatchResult::unchanged();
            }
            select_tab(state, tab);
            DispatchResult::changed()
        }

        Action::TabNext => {
            let next = state.tab.next();
            select_tab(state, next);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn select_tab(state: &mut AppState, tab: Tab) {
    state.tab = tab;
    if tab != Tab::Weather {
        state.input_focused = false;
    }
}
