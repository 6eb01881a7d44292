//! TUI components for rendering different views.

mod gallery;
mod generate;
mod home;
mod nav;
mod profile;
mod prompt_input;
mod settings;
mod toast;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub use gallery::render_history;
pub use generate::{GenerateView, render_generate};
pub use home::render_home;
pub use nav::{render_footer, render_nav};
pub use profile::render_profile;
pub use prompt_input::PromptInput;
pub use settings::{SettingsState, SettingsTab, render_settings};
pub use toast::{Toast, render_toast};

const HEADER_COLOR: Color = Color::Rgb(77, 201, 176);
const SUBTITLE_COLOR: Color = Color::Rgb(140, 140, 150);

/// Centered page title with a subtitle line.
fn page_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(SUBTITLE_COLOR),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Truncate to `max` characters, appending an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("fox", 10), "fox");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("лиса в лесу", 5), "лиса…");
    }
}
