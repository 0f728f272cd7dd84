use crate::error::FetchError;
use crate::models::{ConnectionConfig, Reading};

/// Where a reload currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    /// Reading the saved connection settings
    CredentialsLoading,
    /// Waiting on the sensor
    Fetching,
}

/// Everything the presentation layer needs to draw the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshSnapshot {
    pub config: ConnectionConfig,
    /// Whether the config has been loaded from the store this session
    pub hydrated: bool,
    /// Last good reading, `None` until the first success
    pub reading: Option<Reading>,
    pub in_flight: bool,
    pub phase: RefreshPhase,
    /// Error from the most recent reload, cleared on success
    pub last_error: Option<FetchError>,
}

impl RefreshSnapshot {
    /// True while a reload is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight || self.phase != RefreshPhase::Idle
    }
}
