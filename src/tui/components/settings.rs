//! Settings view.
//!
//! Every preference here is display-only; nothing is wired into generation.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::page_header;
use crate::config::{Config, QualityPreset, StylePreset};

const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const SELECTED_BG: Color = Color::Rgb(45, 48, 55);

/// Sub-tab of the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Generation,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [Self; 3] = [Self::General, Self::Generation, Self::Privacy];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Generation => "Generation",
            Self::Privacy => "Privacy",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::General => Self::Generation,
            Self::Generation => Self::Privacy,
            Self::Privacy => Self::General,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::General => Self::Privacy,
            Self::Generation => Self::General,
            Self::Privacy => Self::Generation,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::General => 0,
            Self::Generation => 1,
            Self::Privacy => 2,
        }
    }
}

/// One row of a settings card.
struct Row {
    label: &'static str,
    description: String,
    value: String,
}

/// In-session settings selections, seeded from configuration.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub row: usize,
    pub theme: String,
    pub language: String,
    pub quality: QualityPreset,
    pub style: StylePreset,
    pub public_profile: bool,
    pub keep_history: bool,
}

impl SettingsState {
    /// Rows on every tab.
    const ROWS: usize = 2;

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            tab: SettingsTab::default(),
            row: 0,
            theme: config.tui.theme.clone(),
            language: config.tui.language.clone(),
            quality: config.generation.quality,
            style: config.generation.style,
            public_profile: config.privacy.public_profile,
            keep_history: config.privacy.keep_history,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.row = 0;
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
        self.row = 0;
    }

    pub const fn next_row(&mut self) {
        if self.row + 1 < Self::ROWS {
            self.row += 1;
        }
    }

    pub const fn previous_row(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    /// Activate the selected row. Returns whether anything changed.
    pub fn activate(&mut self) -> bool {
        match (self.tab, self.row) {
            (SettingsTab::Generation, 0) => self.quality = self.quality.next(),
            (SettingsTab::Generation, _) => self.style = self.style.next(),
            (SettingsTab::Privacy, 0) => self.public_profile = !self.public_profile,
            (SettingsTab::Privacy, _) => self.keep_history = !self.keep_history,
            // Theme and language have a single option each.
            (SettingsTab::General, _) => return false,
        }
        true
    }

    fn rows(&self) -> [Row; 2] {
        match self.tab {
            SettingsTab::General => [
                Row {
                    label: "Theme",
                    description: "Interface color scheme".to_string(),
                    value: self.theme.clone(),
                },
                Row {
                    label: "Language",
                    description: "Interface language".to_string(),
                    value: self.language.clone(),
                },
            ],
            SettingsTab::Generation => [
                Row {
                    label: "Default quality",
                    description: "Resolution offered for new images".to_string(),
                    value: self.quality.to_string(),
                },
                Row {
                    label: "Default style",
                    description: "Style offered for new images".to_string(),
                    value: self.style.to_string(),
                },
            ],
            SettingsTab::Privacy => [
                Row {
                    label: "Public profile",
                    description: "Other users can see your work".to_string(),
                    value: on_off(self.public_profile).to_string(),
                },
                Row {
                    label: "Keep history",
                    description: "Store every generation in history".to_string(),
                    value: on_off(self.keep_history).to_string(),
                },
            ],
        }
    }
}

const fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

pub fn render_settings(frame: &mut Frame, area: Rect, state: &SettingsState) {
    let [header, tabs_area, body] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    page_header(frame, header, "Settings", "Personalize your experience");

    let titles = SettingsTab::ALL.iter().map(|tab| tab.title());
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(Style::default().fg(DIMMED))
        .highlight_style(Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, tabs_area);

    let mut lines = Vec::new();
    for (i, row) in state.rows().into_iter().enumerate() {
        let selected = i == state.row;
        let base = if selected {
            Style::default().bg(SELECTED_BG)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<18}", row.label),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}]", row.value), base.fg(BRAND_TEAL)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" {}", row.description),
            Style::default().fg(DIMMED),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        " ←/→ switch section · ↑/↓ select · enter change",
        Style::default().fg(DIMMED),
    )));

    frame.render_widget(Paragraph::new(lines), body);
}
