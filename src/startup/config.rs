//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::file_store::STORAGE_FILE;
use crate::coordinator::DEFAULT_REQUEST_TIMEOUT;
use crate::notifications::DEFAULT_TOAST_DURATION;

/// The data directory name under the home directory.
const DATA_DIR: &str = ".tempwatch";

/// The log file name.
pub const LOG_FILE: &str = "tempwatch.log";

/// Label shown above the reading.
pub const DEFAULT_SENSOR_LABEL: &str = "CPU Raspberry PI";

/// Default `EnvFilter` directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration.
///
/// Use the builder pattern to customize it, or [`AppConfig::from_env`] to
/// read overrides from the environment.
///
/// # Example
///
/// ```ignore
/// use tempwatch::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_data_dir("/tmp/tempwatch")
///     .with_request_timeout(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the storage document and the log (default: ~/.tempwatch)
    pub data_dir: PathBuf,
    /// Bound on a single fetch (default: 10s)
    pub request_timeout: Duration,
    /// How long a toast stays visible (default: 2s)
    pub toast_duration: Duration,
    /// Label shown on the dashboard
    pub sensor_label: String,
    /// Log filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            toast_duration: DEFAULT_TOAST_DURATION,
            sensor_label: DEFAULT_SENSOR_LABEL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR)
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_sensor_label(mut self, label: impl Into<String>) -> Self {
        self.sensor_label = label.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Path of the key-value storage document.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create config from environment variables.
    ///
    /// - `TEMPWATCH_DATA_DIR` - data directory
    /// - `TEMPWATCH_TIMEOUT_SECS` - fetch timeout in whole seconds
    /// - `TEMPWATCH_LABEL` - dashboard label
    /// - `TEMPWATCH_LOG` - log filter
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = non_empty_var("TEMPWATCH_DATA_DIR") {
            config = config.with_data_dir(dir);
        }

        if let Some(raw) = non_empty_var("TEMPWATCH_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Duration::from_secs(secs));
                }
                _ => tracing::warn!(value = %raw, "Ignoring invalid TEMPWATCH_TIMEOUT_SECS"),
            }
        }

        if let Some(label) = non_empty_var("TEMPWATCH_LABEL") {
            config = config.with_sensor_label(label);
        }

        if let Some(filter) = non_empty_var("TEMPWATCH_LOG") {
            config = config.with_log_filter(filter);
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
