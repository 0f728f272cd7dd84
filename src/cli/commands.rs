//! One-shot commands that work on the stored settings without the TUI.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::coordinator::{ReloadOutcome, RefreshCoordinator};
use crate::error::StoreError;
use crate::models::Reading;
use crate::notifications::Notifier;
use crate::startup::{build_coordinator, build_store, AppConfig};
use crate::store::CredentialStore;

/// `21.00°C (updated 14:03:22)`
pub fn format_reading(reading: &Reading) -> String {
    format!(
        "{}\u{00B0}C (updated {})",
        reading.display_value(),
        reading.observed_time()
    )
}

/// Hydrate and fetch once, returning the printable reading.
pub async fn fetch_once(coordinator: &mut RefreshCoordinator) -> Result<String> {
    match coordinator.reload().await {
        ReloadOutcome::Updated(reading) => Ok(format_reading(&reading)),
        ReloadOutcome::Failed(err) => Err(err.into()),
        ReloadOutcome::Skipped => Err(eyre!("A reload is already in progress")),
    }
}

/// Describe the stored settings with the token masked.
pub async fn describe_config(store: &CredentialStore) -> Result<String> {
    match store.try_load().await {
        Ok(Some(config)) => Ok(format!(
            "Server address: {}\nToken: {}\nRequest URL: {}/temperature",
            if config.address.is_empty() {
                "(empty)"
            } else {
                config.address.as_str()
            },
            if config.token.is_empty() {
                "(empty)".to_string()
            } else {
                config.masked_token()
            },
            config.base_url()
        )),
        Ok(None) => Ok("No settings stored.".to_string()),
        Err(StoreError::Corrupt(e)) => Ok(format!("Stored settings are unreadable: {}", e)),
        Err(e) => Err(e.into()),
    }
}

/// Handle the --fetch command.
pub fn handle_fetch_command(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    // Failures are printed below, so toasts are not needed
    let (notifier, _notifications) = Notifier::channel();

    let line = runtime.block_on(async {
        let mut coordinator = build_coordinator(config, notifier)?;
        fetch_once(&mut coordinator).await
    })?;

    println!("{}", line);
    Ok(())
}

/// Handle the --show-config command.
pub fn handle_show_config_command(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let store = build_store(config);
    let description = runtime.block_on(describe_config(&store))?;
    println!("{}", description);
    println!("Storage: {}", config.storage_path().display());
    Ok(())
}

/// Handle the --reset command.
pub fn handle_reset_command(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let store = build_store(config);
    runtime.block_on(store.clear())?;
    println!("Stored settings removed.");
    Ok(())
}
