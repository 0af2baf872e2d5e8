use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Search your city (e.g. Maricá)";

/// Submit button color, independent of the tab theme
pub const ACCENT: Color = Color::Rgb(0x00, 0x7A, 0xFF);

const BUTTON_WIDTH: u16 = 10;

/// City text field with a submit indicator beside it
pub struct SearchInput {
    input: TextInput,
}

pub struct SearchInputProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    pub is_loading: bool,
    pub spinner_frame: &'static str,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style(bg: Option<Color>) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 1),
                bg,
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for SearchInput {
    type Props<'a> = SearchInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchBlur],
            KeyCode::Enter => return vec![Action::SearchSubmit(props.query.to_string())],
            KeyCode::Tab => return vec![Action::TabNext],
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(None),
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)]).split(area);

        let input_bg = if props.is_focused {
            Color::Rgb(50, 50, 60)
        } else {
            Color::Rgb(35, 35, 45)
        };
        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: Self::input_style(Some(input_bg)),
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let label = if props.is_loading {
            props.spinner_frame
        } else {
            "Search"
        };
        let button_rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(chunks[1]);
        let button_style = Style::default()
            .bg(ACCENT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        for row in button_rows.iter() {
            frame.render_widget(Paragraph::new("").style(button_style), *row);
        }
        frame.render_widget(
            Paragraph::new(Line::from(label))
                .alignment(Alignment::Center)
                .style(button_style),
            button_rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn props(query: &str, is_focused: bool) -> SearchInputProps<'_> {
        SearchInputProps {
            query,
            is_focused,
            is_loading: false,
            spinner_frame: "",
        }
    }

    #[test]
    fn test_enter_submits_raw_query() {
        let mut input = SearchInput::new();
        let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let actions: Vec<_> = input
            .handle_event(&enter, props(" Maricá ", true))
            .into_iter()
            .collect();

        actions.assert_count(1);
        actions.assert_first(Action::SearchSubmit(" Maricá ".into()));
    }

    #[test]
    fn test_escape_blurs() {
        let mut input = SearchInput::new();
        let esc = EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        let actions: Vec<_> = input
            .handle_event(&esc, props("", true))
            .into_iter()
            .collect();

        actions.assert_first(Action::SearchBlur);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = SearchInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props("", false))
            .into_iter()
            .collect();

        actions.assert_empty();
    }

    #[test]
    fn test_render_shows_button() {
        let mut render = RenderHarness::new(60, 3);
        let mut input = SearchInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("", false));
        });

        assert!(output.contains("Search"), "output:\n{output}");
    }
}
