//! History view: every image generated this session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{page_header, truncate};
use crate::core::History;

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const SELECTED_BG: Color = Color::Rgb(45, 48, 55);

pub fn render_history(frame: &mut Frame, area: Rect, history: &History, selected: usize) {
    let [header, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    page_header(
        frame,
        header,
        "Generation history",
        "All of your images in one place",
    );

    if history.is_empty() {
        render_empty(frame, body);
        return;
    }

    let width = body.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, image)| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(format!("#{:<3}", history.len() - i), Style::default().fg(DIMMED)),
                    Span::styled(
                        truncate(image.prompt(), width),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", truncate(image.url(), width)),
                    Style::default().fg(DIMMED),
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(Style::default().bg(SELECTED_BG))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, body, &mut state);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("∅", Style::default().fg(DIMMED))),
        Line::from(Span::styled(
            "History is empty",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create your first image to get started",
            Style::default().fg(DIMMED),
        )),
        Line::default(),
        Line::from(Span::styled(
            " Go to generator ⏎ ",
            Style::default()
                .fg(Color::Black)
                .bg(BRAND_TEAL)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
