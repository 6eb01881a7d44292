//! Profile view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::page_header;
use crate::config::ProfileConfig;

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);

pub fn render_profile(frame: &mut Frame, area: Rect, image_count: usize, profile: &ProfileConfig) {
    let [header, stats, info] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    page_header(frame, header, "My profile", &profile.username);

    // Publishing and followers are not implemented.
    let counters = [
        (image_count.to_string(), "Images created"),
        ("0".to_string(), "Publications"),
        ("0".to_string(), "Followers"),
    ];
    let cols = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(stats);
    for (cell, (value, label)) in cols.iter().zip(counters) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(BRAND_TEAL)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(DIMMED))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *cell);
    }

    let bio = if profile.bio.is_empty() {
        Span::styled("Tell us about yourself...", Style::default().fg(DIMMED))
    } else {
        Span::raw(profile.bio.clone())
    };
    let lines = vec![
        field("Username", Span::raw(profile.username.clone())),
        field("Email", Span::raw(profile.email.clone())),
        field("About", bio),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Information ")
                .borders(Borders::ALL),
        ),
        info,
    );
}

fn field<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label:<10}"), Style::default().fg(DIMMED)),
        value,
    ])
}
