//! Type definitions for the application state.

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    /// Settings dialog over the dashboard
    Settings,
}
