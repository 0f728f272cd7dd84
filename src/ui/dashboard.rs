//! Dashboard screen: the reading, when it was taken, and what is going on.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::coordinator::{RefreshPhase, RefreshSnapshot};
use crate::ui::components::{render_status_line, StatusIndicatorType};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_READING};

/// Shown in place of the value before the first successful fetch.
pub const PLACEHOLDER_VALUE: &str = "--.--";

const UNIT: &str = "\u{00B0}C";

/// Pick the status line for the current state.
pub fn status_indicator(snapshot: &RefreshSnapshot, spinner_frame: usize) -> StatusIndicatorType {
    match snapshot.phase {
        RefreshPhase::CredentialsLoading => {
            return StatusIndicatorType::spinner("Loading settings...", spinner_frame)
        }
        RefreshPhase::Fetching => return StatusIndicatorType::spinner("Fetching...", spinner_frame),
        RefreshPhase::Idle => {}
    }

    if let Some(err) = &snapshot.last_error {
        return StatusIndicatorType::error(err.to_string());
    }

    if snapshot.hydrated && snapshot.config.address.is_empty() {
        return StatusIndicatorType::info("No server configured. Press s to set one.");
    }

    if snapshot.reading.is_some() {
        StatusIndicatorType::success(snapshot.config.base_url())
    } else {
        StatusIndicatorType::info("Waiting for first reading")
    }
}

fn value_text(snapshot: &RefreshSnapshot) -> String {
    match &snapshot.reading {
        Some(reading) => format!("{}{}", reading.display_value(), UNIT),
        None => format!("{}{}", PLACEHOLDER_VALUE, UNIT),
    }
}

fn updated_text(snapshot: &RefreshSnapshot) -> String {
    match &snapshot.reading {
        Some(reading) => format!("Updated {}", reading.observed_time()),
        None => "Not updated yet".to_string(),
    }
}

fn key_hints(ctx: &LayoutContext) -> Line<'static> {
    let text = if ctx.is_narrow() {
        "r reload  s settings  q quit"
    } else {
        "r/F5 reload  \u{2191} scroll to refresh  s settings  q quit"
    };
    Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)))
}

/// Render the dashboard into `area`.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    snapshot: &RefreshSnapshot,
    label: &str,
    spinner_frame: usize,
) {
    let block = Block::default()
        .title(Span::styled(
            " tempwatch ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_padding = if ctx.is_short() { 0 } else { 1 };
    let [_, label_area, value_area, updated_area, _, status_area, _, hints_area] =
        Layout::vertical([
            Constraint::Length(top_padding),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(COLOR_HEADER),
        )))
        .alignment(Alignment::Center),
        label_area,
    );

    let value_style = if snapshot.reading.is_some() {
        Style::default()
            .fg(COLOR_READING)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(value_text(snapshot), value_style)))
            .alignment(Alignment::Center),
        value_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            updated_text(snapshot),
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        updated_area,
    );

    frame.render_widget(
        Paragraph::new(render_status_line(&status_indicator(snapshot, spinner_frame)))
            .alignment(Alignment::Center),
        status_area,
    );

    frame.render_widget(
        Paragraph::new(key_hints(ctx)).alignment(Alignment::Center),
        hints_area,
    );
}
