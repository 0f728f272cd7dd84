//! Toast overlay.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::notifications::{Notification, NotificationLevel};
use crate::ui::theme::{COLOR_DIALOG_BG, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

const MAX_TOAST_WIDTH: u16 = 60;

fn level_color(level: NotificationLevel) -> ratatui::style::Color {
    match level {
        NotificationLevel::Success => COLOR_SUCCESS,
        NotificationLevel::Error => COLOR_ERROR,
        NotificationLevel::Info => COLOR_INFO,
    }
}

/// Area of the toast: bottom center, above the key hints.
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let message_width = message.width();
    let text_width = u16::try_from(message_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let width = text_width.min(max_width);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let lines = u16::try_from(message_width.div_ceil(inner_width).max(1)).unwrap_or(u16::MAX);
    let height = lines.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(height + 2),
        width,
        height,
    }
}

/// Render `notification` as a bordered toast.
pub fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let color = level_color(notification.level);
    let toast = toast_area(area, &notification.message);

    frame.render_widget(Clear, toast);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color),
        )))
        .wrap(Wrap { trim: true })
        .block(block),
        toast,
    );
}
