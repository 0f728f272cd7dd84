//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters the alternate screen
/// - Enables mouse capture (scroll-up on the dashboard reloads)
/// - Enables focus change reporting (drives the lifecycle signal)
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
}

/// Leave TUI mode and restore the terminal.
///
/// Safe to call more than once. Errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(
        writer,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore stdout to a usable state after a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
