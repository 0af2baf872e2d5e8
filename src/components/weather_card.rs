use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::condition::condition_style;
use crate::state::WeatherReading;

/// Rows taken by the big temperature when a FIGlet font fits
const TEMP_CAP: u16 = 6;

pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub reading: &'a WeatherReading,
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}

pub fn format_wind(kmh: f64) -> String {
    format!("Wind: {kmh} km/h")
}

/// "region - country", dropping whichever side is missing
pub fn format_region(reading: &WeatherReading) -> String {
    match (reading.region.is_empty(), reading.country.is_empty()) {
        (false, false) => format!("{} - {}", reading.region, reading.country),
        (false, true) => reading.region.clone(),
        (true, false) => reading.country.clone(),
        (true, true) => String::new(),
    }
}

fn art_color(color: Color) -> ArtColor {
    match color {
        Color::Rgb(r, g, b) => ArtColor::rgb(r, g, b),
        _ => ArtColor::rgb(180, 180, 180),
    }
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let reading = props.reading;
        let style = condition_style(reading.weather_code);

        let chunks = Layout::vertical([
            Constraint::Length(1),        // City
            Constraint::Length(1),        // Region - country
            Constraint::Length(1),        // Spacer
            Constraint::Length(1),        // Icon
            Constraint::Max(TEMP_CAP),    // Temperature
            Constraint::Length(1),        // Label
            Constraint::Length(1),        // Spacer
            Constraint::Length(1),        // Wind
        ])
        .flex(Flex::Center)
        .split(area);

        let city = Line::from(Span::styled(
            reading.city.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(city), chunks[0]);

        let region = Line::from(Span::styled(
            format_region(reading),
            Style::default().fg(Color::Rgb(0x7F, 0x8C, 0x8D)),
        ))
        .centered();
        frame.render_widget(Paragraph::new(region), chunks[1]);

        let icon = Line::from(Span::styled(
            style.icon.glyph(),
            Style::default().fg(style.color),
        ))
        .centered();
        frame.render_widget(Paragraph::new(icon), chunks[3]);

        let start = art_color(style.color);
        let end = start.interpolate(ArtColor::rgb(255, 255, 255), 0.4);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
        let temp_text = format_temperature(reading.temperature);
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[4]);

        let label = Line::from(Span::styled(
            style.label,
            Style::default().fg(Color::Rgb(0x7F, 0x8C, 0x8D)),
        ))
        .centered();
        frame.render_widget(Paragraph::new(label), chunks[5]);

        let wind = Line::from(vec![
            Span::styled("\u{2248} ", Style::default().fg(Color::DarkGray)),
            Span::styled(format_wind(reading.wind_speed), Style::default().fg(Color::Gray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(wind), chunks[7]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn reading() -> WeatherReading {
        WeatherReading {
            city: "Maricá".into(),
            region: "Rio de Janeiro".into(),
            country: "Brazil".into(),
            temperature: 27.0,
            weather_code: 0,
            wind_speed: 12.0,
        }
    }

    #[test]
    fn test_number_formatting_matches_reading() {
        assert_eq!(format_temperature(27.0), "27°C");
        assert_eq!(format_temperature(-3.5), "-3.5°C");
        assert_eq!(format_wind(12.0), "Wind: 12 km/h");
    }

    #[test]
    fn test_region_line() {
        let mut r = reading();
        assert_eq!(format_region(&r), "Rio de Janeiro - Brazil");
        r.region.clear();
        assert_eq!(format_region(&r), "Brazil");
    }

    #[test]
    fn test_render_card() {
        let mut render = RenderHarness::new(50, 16);
        let mut card = WeatherCard;
        let reading = reading();

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), WeatherCardProps { reading: &reading });
        });

        assert!(output.contains("Maricá"), "output:\n{output}");
        assert!(output.contains("Rio de Janeiro - Brazil"), "output:\n{output}");
        assert!(output.contains("Sunny"), "output:\n{output}");
        assert!(output.contains("Wind: 12 km/h"), "output:\n{output}");
    }
}
