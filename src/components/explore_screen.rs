use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::condition::ConditionStyle;

/// Reference screen listing how weather codes are displayed
pub struct ExploreScreen;

pub struct ExploreScreenProps {
    pub accent: Color,
}

impl Component<Action> for ExploreScreen {
    type Props<'a> = ExploreScreenProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Legend
        ])
        .split(area);

        let title = Line::from(Span::styled(
            "Explore",
            Style::default().fg(props.accent).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[1]);

        let subtitle = Line::from(Span::styled(
            "How weather codes are shown",
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[2]);

        let rows: Vec<Line> = ConditionStyle::legend()
            .iter()
            .map(|(codes, style)| {
                Line::from(vec![
                    Span::styled(style.icon.glyph(), Style::default().fg(style.color)),
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<10}", style.label),
                        Style::default().fg(style.color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<14}", style.icon.name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("codes {codes}"), Style::default().fg(Color::Gray)),
                ])
                .centered()
            })
            .collect();
        frame.render_widget(Paragraph::new(rows), chunks[4]);
    }
}
