//! Toast rendering
//!
//! Draws the toast stack top-centre, newest at the bottom of the stack.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const TOAST_HEIGHT: u16 = 3;
const MIN_TOAST_WIDTH: u16 = 24;
const MAX_VISIBLE_TOASTS: usize = 3;
const TOP_MARGIN: u16 = 1;

/// Render the toast overlay.
///
/// Call after the main UI so toasts appear on top. Expired toasts are pruned
/// first. Returns the areas drawn, oldest first, for click-to-close.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) -> Vec<(u64, Rect)> {
    notification.prune_expired();

    let frame_area = frame.area();
    let max_width = frame_area.width.saturating_sub(4);
    let toasts = notification.toasts();
    let skip = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);

    let mut drawn = Vec::new();
    let mut top = TOP_MARGIN;

    for toast in toasts.iter().skip(skip) {
        let content_width = toast.message.chars().count() as u16 + 4; // 2 padding + 2 borders
        let width = content_width.max(MIN_TOAST_WIDTH).min(max_width);
        let area = popup::top_centered(frame_area, width, TOAST_HEIGHT, top);

        if area.width < 5 || area.height < TOAST_HEIGHT {
            break;
        }

        popup::clear_area(frame, area);

        let style = &toast.style;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style.border).bg(style.bg))
            .style(Style::default().bg(style.bg));

        let text = Line::from(Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(style.fg).bg(style.bg),
        ));

        frame.render_widget(Paragraph::new(text).block(block), area);
        drawn.push((toast.id, area));
        top += TOAST_HEIGHT;
    }

    drawn
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
