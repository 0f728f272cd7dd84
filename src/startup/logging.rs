//! File logging.
//!
//! The TUI owns stdout, so log lines go to `<data_dir>/tempwatch.log`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_path`.
///
/// `filter` uses `EnvFilter` syntax; an invalid directive falls back to
/// `info`. Fails if the file cannot be opened or a subscriber is already
/// installed. Callers treat failure as non-fatal.
pub fn init_logging(log_path: &Path, filter: &str) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| format!("Failed to open log file {}: {}", log_path.display(), e))?;

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {}", e))
}
