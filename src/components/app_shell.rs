use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, ExploreScreen, ExploreScreenProps, TabBar, TabBarProps, WeatherScreen,
    WeatherScreenProps,
};
use crate::action::Action;
use crate::state::{AppState, Tab};
use crate::theme::{TabBarPosition, tab_bar_style};

/// Props for AppShell - read-only view of state
pub struct AppShellProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Navigation shell: routes between the two screens and owns the tab bar
#[derive(Default)]
pub struct AppShell {
    weather: WeatherScreen,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_shell_key(code: KeyCode, state: &AppState) -> Option<Action> {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Right | KeyCode::Left => {
                Some(Action::TabNext)
            }
            KeyCode::Char('1') => Some(Action::TabSelect(Tab::Weather)),
            KeyCode::Char('2') => Some(Action::TabSelect(Tab::Explore)),
            KeyCode::Char('t') => Some(Action::UiToggleTheme),
            KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::SearchFocus),
            KeyCode::Enter if state.tab == Tab::Weather => {
                Some(Action::SearchSubmit(state.query.clone()))
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Component<Action> for AppShell {
    type Props<'a> = AppShellProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let state = props.state;
        if state.tab == Tab::Weather && state.input_focused {
            return self
                .weather
                .handle_event(
                    event,
                    WeatherScreenProps {
                        state,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect();
        }

        match event {
            EventKind::Key(key) => Self::handle_shell_key(key.code, state).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AppShellProps<'_>) {
        let state = props.state;
        let palette = state.theme.palette();
        let bar_style = tab_bar_style(state.platform, state.theme);

        let (content_area, hints_area, tab_area) = match bar_style.position {
            TabBarPosition::Docked => {
                let chunks = Layout::vertical([
                    Constraint::Min(1),    // Screen
                    Constraint::Length(1), // Help bar
                    Constraint::Length(1), // Tab bar
                ])
                .split(area);
                (chunks[0], chunks[1], chunks[2])
            }
            TabBarPosition::Absolute => {
                let chunks = Layout::vertical([
                    Constraint::Min(1),    // Screen, tab bar drawn over its last row
                    Constraint::Length(1), // Help bar
                ])
                .split(area);
                let content = chunks[0];
                let tab = Rect {
                    y: content.bottom().saturating_sub(1),
                    height: content.height.min(1),
                    ..content
                };
                (content, chunks[1], tab)
            }
        };

        match state.tab {
            Tab::Weather => self.weather.render(
                frame,
                content_area,
                WeatherScreenProps {
                    state,
                    is_focused: props.is_focused,
                },
            ),
            Tab::Explore => {
                let mut explore = ExploreScreen;
                explore.render(
                    frame,
                    content_area,
                    ExploreScreenProps {
                        accent: palette.active,
                    },
                );
            }
        }

        let typing_hints = [
            StatusBarHint::new("enter", "search"),
            StatusBarHint::new("esc", "done"),
            StatusBarHint::new("tab", "switch"),
        ];
        let browsing_hints = [
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("tab", "switch"),
            StatusBarHint::new("t", "theme"),
            StatusBarHint::new("q", "quit"),
        ];
        let hints: &[_] = if state.input_focused && state.tab == Tab::Weather {
            &typing_hints
        } else {
            &browsing_hints
        };

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            hints_area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        let mut tab_bar = TabBar;
        tab_bar.render(
            frame,
            tab_area,
            TabBarProps {
                active: state.tab,
                palette,
                style: bar_style,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::assert_not_emitted;
    use tui_dispatch::testing::*;

    fn browsing() -> AppState {
        AppState {
            input_focused: false,
            ..Default::default()
        }
    }

    fn actions_for(state: &AppState, keys: &str) -> Vec<Action> {
        let mut shell = AppShell::new();
        let event = EventKind::Key(key(keys));
        shell
            .handle_event(
                &event,
                AppShellProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_shell_keys() {
        let state = browsing();
        actions_for(&state, "2").assert_first(Action::TabSelect(Tab::Explore));
        actions_for(&state, "t").assert_first(Action::UiToggleTheme);
        actions_for(&state, "/").assert_first(Action::SearchFocus);
        actions_for(&state, "q").assert_first(Action::Quit);
    }

    #[test]
    fn test_typing_goes_to_input_not_shell() {
        let state = AppState::default();
        assert!(state.input_focused);

        let actions = actions_for(&state, "q");

        assert_not_emitted!(actions, Action::Quit);
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = browsing();
        let mut shell = AppShell::new();

        let actions: Vec<_> = shell
            .handle_event(
                &EventKind::Key(key("q")),
                AppShellProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();

        actions.assert_empty();
    }
}
