//! Status Indicator Component
//!
//! One-line spinner, success, error and info indicators.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_BUSY, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner character for `frame`.
pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render an indicator as a single line.
pub fn render_status_line(indicator: &StatusIndicatorType) -> Line<'static> {
    let (icon, message, color, bold) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (spinner_char(*frame), message, COLOR_BUSY, true)
        }
        StatusIndicatorType::Success { message } => ('\u{25CF}', message, COLOR_SUCCESS, false),
        StatusIndicatorType::Error { message } => ('\u{2717}', message, COLOR_ERROR, true),
        StatusIndicatorType::Info { message } => ('\u{25CB}', message, COLOR_DIM, false),
    };

    let mut text_style = Style::default().fg(color);
    if bold {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(message.clone(), text_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_spinner_frames_cycle() {
        assert_eq!(spinner_char(0), '◐');
        assert_eq!(spinner_char(5), '◓');
        assert_eq!(next_spinner_frame(3), 0);
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            line_text(&render_status_line(&StatusIndicatorType::spinner("Fetching", 2))),
            "◑ Fetching"
        );
        assert_eq!(
            line_text(&render_status_line(&StatusIndicatorType::error("Invalid token!"))),
            "\u{2717} Invalid token!"
        );
        assert_eq!(
            line_text(&render_status_line(&StatusIndicatorType::success("ok"))),
            "\u{25CF} ok"
        );
    }
}
