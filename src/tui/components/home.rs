//! Home view: hero, example tiles, and feature cards.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::truncate;
use crate::core::image::ExampleTile;

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const TAGLINE_COLOR: Color = Color::Rgb(140, 140, 150);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const CARD_BORDER: Color = Color::Rgb(60, 62, 70);

/// Feature cards under the example tiles.
const FEATURES: &[(&str, &str)] = &[
    (
        "AI generation",
        "Describe an image and get a result in seconds",
    ),
    ("Sharing", "Share a result or copy its link in one keystroke"),
    ("History", "Every image from this session in one place"),
];

pub fn render_home(frame: &mut Frame, area: Rect, tiles: &[ExampleTile]) {
    let [hero, examples, features] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(8),
        Constraint::Length(6),
    ])
    .areas(area);

    render_hero(frame, hero);
    render_examples(frame, examples, tiles);
    render_features(frame, features);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Create art with AI",
            Style::default()
                .fg(BRAND_TEAL)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Turn text into striking images and share the results with friends.",
            Style::default().fg(TAGLINE_COLOR),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " ▶ Start creating ",
                Style::default()
                    .fg(Color::Black)
                    .bg(BRAND_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  press enter", Style::default().fg(DIMMED)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_examples(frame: &mut Frame, area: Rect, tiles: &[ExampleTile]) {
    let block = Block::default()
        .title(" Examples ")
        .title_alignment(Alignment::Center)
        .borders(Borders::TOP)
        .border_style(Style::default().fg(CARD_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(inner);
    for (row_area, row_tiles) in rows.iter().zip(tiles.chunks(3)) {
        let cols = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(*row_area);

        for (cell, tile) in cols.iter().zip(row_tiles) {
            let width = cell.width.saturating_sub(4) as usize;
            let card = Paragraph::new(vec![
                Line::from(Span::raw(truncate(&tile.caption, width))),
                Line::from(Span::styled(
                    truncate(&tile.url, width),
                    Style::default().fg(DIMMED),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(CARD_BORDER)),
            );
            frame.render_widget(card, *cell);
        }
    }
}

fn render_features(frame: &mut Frame, area: Rect) {
    let cols = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (cell, (title, description)) in cols.iter().zip(FEATURES) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                *title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*description, Style::default().fg(TAGLINE_COLOR))),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER)),
        );
        frame.render_widget(card, *cell);
    }
}
