use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{DataResource, EventKind};

use super::search_input::ACCENT;
use super::{Component, SearchInput, SearchInputProps, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::{AppState, WeatherReading};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Search form plus whichever of empty/loading/error/result applies
#[derive(Default)]
pub struct WeatherScreen {
    search: SearchInput,
}

pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let search_props = SearchInputProps {
            query: &props.state.query,
            is_focused: props.is_focused && props.state.input_focused,
            is_loading: props.state.is_loading(),
            spinner_frame: props.state.spinner_frame(),
        };
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Body
        ])
        .split(area);

        let title = Line::from(vec![
            Span::styled("Weather", Style::default().fg(Color::Rgb(0x2C, 0x3E, 0x50))),
            Span::styled(
                "Now",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[1]);

        self.search.render(
            frame,
            chunks[3],
            SearchInputProps {
                query: &state.query,
                is_focused: props.is_focused && state.input_focused,
                is_loading: state.is_loading(),
                spinner_frame: state.spinner_frame(),
            },
        );

        match &state.weather {
            DataResource::Empty => render_hint(frame, chunks[5]),
            DataResource::Loading => render_loading(frame, chunks[5]),
            DataResource::Failed(message) => render_error(frame, chunks[5], message),
            DataResource::Loaded(reading) => render_reading(frame, chunks[5], reading),
        }
    }
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let msg = Line::from(Span::styled(
        "Looking up weather...",
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(msg), area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Line::from(vec![
        Span::raw(ERROR_ICON),
        Span::raw(" "),
        Span::styled(
            message.to_string(),
            Style::default().fg(Color::Rgb(0xC0, 0x39, 0x2B)),
        ),
    ])
    .centered();
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
    frame.render_widget(
        Paragraph::new(banner).style(Style::default().bg(Color::Rgb(0xFA, 0xDB, 0xD8))),
        rows[0],
    );
}

fn render_reading(frame: &mut Frame, area: Rect, reading: &WeatherReading) {
    let mut card = WeatherCard;
    card.render(frame, area, WeatherCardProps { reading });
}
