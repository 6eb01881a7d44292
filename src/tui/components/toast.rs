//! Transient notification overlay.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::core::{Notification, NotificationKind};

const SUCCESS_COLOR: Color = Color::Rgb(77, 201, 176);
const ERROR_COLOR: Color = Color::Rgb(230, 90, 90);
const INFO_COLOR: Color = Color::Rgb(140, 140, 150);
const TOAST_BG: Color = Color::Rgb(30, 32, 38);

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// A notification on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    shown_at: Instant,
}

impl Toast {
    #[must_use]
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) > ttl
    }
}

const fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => SUCCESS_COLOR,
        NotificationKind::Error => ERROR_COLOR,
        NotificationKind::Info => INFO_COLOR,
    }
}

/// Render the toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    if area.width <= TOAST_WIDTH || area.height < TOAST_HEIGHT + 2 {
        return;
    }

    let rect = Rect::new(
        (area.x + area.width).saturating_sub(TOAST_WIDTH + 1),
        (area.y + area.height).saturating_sub(TOAST_HEIGHT + 1),
        TOAST_WIDTH,
        TOAST_HEIGHT,
    );
    let color = kind_color(toast.notification.kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(TOAST_BG));
    let lines = vec![
        Line::from(Span::styled(
            toast.notification.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.notification.description.clone()),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        rect,
    );
}
