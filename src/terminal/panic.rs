//! Panic hook restoring the terminal.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that leaves TUI mode before reporting the panic.
///
/// Call after `color_eyre::install()` so its report is chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
