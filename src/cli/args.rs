//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Fetch one reading and print it
    Fetch,
    /// Print the stored connection settings
    ShowConfig,
    /// Delete the stored connection settings
    Reset,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the command to run.
///
/// The first recognised flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use tempwatch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tempwatch".to_string(), "--fetch".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Fetch);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--fetch" => return CliCommand::Fetch,
            "--show-config" => return CliCommand::ShowConfig,
            "--reset" => return CliCommand::Reset,
            _ => {}
        }
    }
    CliCommand::RunTui
}
