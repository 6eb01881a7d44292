//! Generate view: prompt editor and results.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{PromptInput, page_header, truncate};
use crate::core::History;

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const PLACEHOLDER_COLOR: Color = Color::Rgb(80, 80, 90);
const SELECTED_BG: Color = Color::Rgb(45, 48, 55);

/// Everything the generate view reads.
pub struct GenerateView<'a> {
    pub input: &'a PromptInput,
    pub placeholder: &'a str,
    pub generating: bool,
    pub spinner: &'a str,
    pub history: &'a History,
    pub selected: usize,
}

/// Render the generate view.
///
/// Returns where the terminal cursor belongs, or `None` while the editor is
/// read-only.
#[allow(clippy::cast_possible_truncation)]
pub fn render_generate(frame: &mut Frame, area: Rect, view: &GenerateView<'_>) -> Option<Position> {
    let [header, editor, status, results] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    page_header(
        frame,
        header,
        "Image generator",
        "Describe what you want to see",
    );

    let border = if view.generating { DIMMED } else { BRAND_TEAL };
    let block = Block::default()
        .title(" Image description ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(editor);
    let text = if view.input.is_empty() {
        Line::from(Span::styled(
            view.placeholder.to_string(),
            Style::default().fg(PLACEHOLDER_COLOR),
        ))
    } else {
        Line::from(view.input.text().to_string())
    };

    // Keep the cursor visible on long prompts.
    let column = view.input.cursor_column() as u16;
    let scroll = column.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(text).block(block).scroll((0, scroll)), editor);

    let status_line = if view.generating {
        Line::from(Span::styled(
            format!(" {} Generating…", view.spinner),
            Style::default().fg(BRAND_TEAL),
        ))
    } else {
        Line::from(Span::styled(
            " ⏎ Generate image",
            Style::default().fg(DIMMED),
        ))
    };
    frame.render_widget(Paragraph::new(status_line), status);

    if !view.history.is_empty() {
        render_results(frame, results, view.history, view.selected);
    }

    if view.generating {
        None
    } else {
        Some(Position::new(inner.x + column - scroll, inner.y))
    }
}

fn render_results(frame: &mut Frame, area: Rect, history: &History, selected: usize) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = history
        .iter()
        .map(|image| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    truncate(image.prompt(), width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} · {}", image.display_time(), truncate(image.url(), width)),
                    Style::default().fg(DIMMED),
                )),
                Line::default(),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Results ({}) ", history.len()))
                .borders(Borders::TOP),
        )
        .highlight_style(Style::default().bg(SELECTED_BG))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
