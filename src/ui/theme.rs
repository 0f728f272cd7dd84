//! Color theme constants.
//!
//! Defines the minimal dark palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status Colors
// ============================================================================

/// The temperature value itself
pub const COLOR_READING: Color = Color::LightGreen;

/// Work in progress (spinner)
pub const COLOR_BUSY: Color = Color::Yellow;

/// Success state - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error state
pub const COLOR_ERROR: Color = Color::Red;

/// Informational toasts
pub const COLOR_INFO: Color = Color::Cyan;
