//! Navigation bar and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::BRAND;
use crate::tui::state::View;

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const PRO_COLOR: Color = Color::Rgb(180, 160, 100);

/// Render the top bar: brand, one tab per view, and the Pro badge.
pub fn render_nav(frame: &mut Frame, area: Rect, active: View) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(DIMMED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand_area, tabs_area, pro_area] = Layout::horizontal([
        Constraint::Length(12),
        Constraint::Min(0),
        Constraint::Length(8),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✦ ", Style::default().fg(BRAND_TEAL)),
            Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD)),
        ])),
        brand_area,
    );

    let mut spans = Vec::new();
    for (i, view) in View::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, view.label());
        let style = if *view == active {
            Style::default()
                .fg(Color::Black)
                .bg(BRAND_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIMMED)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        tabs_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled("♛ Pro", Style::default().fg(PRO_COLOR)))
            .alignment(Alignment::Right),
        pro_area,
    );
}

/// Render the footer with key hints for the active view.
pub fn render_footer(frame: &mut Frame, area: Rect, active: View, generating: bool) {
    let hints = match active {
        View::Home => "enter start creating · tab/1-5 switch view · q quit",
        View::Generate if generating => "generating… · tab switch view · ctrl+c quit",
        View::Generate => {
            "enter generate · ↑/↓ select · ctrl+s share · ctrl+y copy link · ctrl+r reuse · esc home"
        }
        View::History => "↑/↓ select · s share · c copy link · r reuse · tab/1-5 switch view · q quit",
        View::Profile => "tab/1-5 switch view · q quit",
        View::Settings => "←/→ section · ↑/↓ select · enter change · q quit",
    };

    let line = Line::from(vec![
        Span::styled(format!("{BRAND} "), Style::default().fg(BRAND_TEAL)),
        Span::styled(hints, Style::default().fg(DIMMED)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
