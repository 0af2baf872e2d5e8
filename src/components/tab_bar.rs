use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Tab;
use crate::theme::{TabBarStyle, TabPalette};

/// Bottom tab bar; purely presentational
pub struct TabBar;

pub struct TabBarProps {
    pub active: Tab,
    pub palette: TabPalette,
    pub style: TabBarStyle,
}

impl Component<Action> for TabBar {
    type Props<'a> = TabBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            let focused = tab == props.active;
            let style = if focused {
                Style::default()
                    .fg(props.palette.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(props.palette.inactive)
            };
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            spans.push(Span::styled(
                format!("{} {} {}", tab.glyph(focused), i + 1, tab.title()),
                style,
            ));
        }

        let mut bar = Paragraph::new(Line::from(spans).centered());
        if let Some(bg) = props.style.background {
            bar = bar.style(Style::default().bg(bg));
        }
        frame.render_widget(bar, area);
    }
}
