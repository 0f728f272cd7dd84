//! Command-line interface.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use tempwatch::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use commands::{
    describe_config, fetch_once, format_reading, handle_fetch_command, handle_reset_command,
    handle_show_config_command,
};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::startup::AppConfig;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` never returns.
pub fn run_cli_command(command: CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Fetch => Some(handle_fetch_command(config)),
        CliCommand::ShowConfig => Some(handle_show_config_command(config)),
        CliCommand::Reset => Some(handle_reset_command(config)),
        CliCommand::RunTui => None,
    }
}
