//! UI rendering.
//!
//! Everything is drawn from the coordinator's [`RefreshSnapshot`](crate::coordinator::RefreshSnapshot)
//! plus the app's own view state:
//! - Dashboard with the reading, update time and status line
//! - Settings dialog over the dashboard when open
//! - The current toast, if any
//!
//! All render functions receive a `LayoutContext` for responsive sizing.

pub mod components;
mod dashboard;
pub mod layout;
mod settings_dialog;
pub mod theme;
mod toast;

pub use dashboard::{render_dashboard, status_indicator, PLACEHOLDER_VALUE};
pub use layout::LayoutContext;
pub use settings_dialog::render_settings_dialog;
pub use toast::{render_toast, toast_area};

use ratatui::Frame;

use crate::app::{App, Screen};

/// Draw the whole UI for `app`.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let snapshot = app.view.borrow().clone();

    render_dashboard(
        frame,
        area,
        &ctx,
        &snapshot,
        &app.sensor_label,
        app.spinner_frame,
    );

    if app.screen == Screen::Settings {
        render_settings_dialog(frame, area, &ctx, &app.settings);
    }

    if let Some(notification) = app.toasts.current() {
        render_toast(frame, area, notification);
    }
}
