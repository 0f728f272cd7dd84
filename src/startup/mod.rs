//! Startup wiring with dependency injection.
//!
//! # Components
//!
//! - [`config`] - Runtime configuration
//! - [`logging`] - File logging setup
//!
//! # Usage
//!
//! ```ignore
//! use tempwatch::startup::{build_coordinator, AppConfig};
//!
//! let config = AppConfig::from_env();
//! let (notifier, notifications) = Notifier::channel();
//! let coordinator = build_coordinator(&config, notifier)?;
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;

use std::sync::Arc;

use crate::adapters::{FileKeyValueStore, ReqwestHttpClient};
use crate::coordinator::RefreshCoordinator;
use crate::notifications::Notifier;
use crate::store::CredentialStore;
use crate::traits::{HttpClient, HttpError, KeyValueStore};

/// Credential store over the production file backend.
pub fn build_store(config: &AppConfig) -> CredentialStore {
    let backend: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(config.storage_path()));
    CredentialStore::new(backend)
}

/// Coordinator over the production storage and HTTP client.
pub fn build_coordinator(
    config: &AppConfig,
    notifier: Notifier,
) -> Result<RefreshCoordinator, HttpError> {
    let client: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout)?);
    Ok(build_coordinator_with(config, build_store(config), client, notifier))
}

/// Coordinator over injected dependencies.
pub fn build_coordinator_with(
    config: &AppConfig,
    store: CredentialStore,
    client: Arc<dyn HttpClient>,
    notifier: Notifier,
) -> RefreshCoordinator {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        timeout_secs = config.request_timeout.as_secs(),
        "Building refresh coordinator"
    );
    RefreshCoordinator::new(store, client, notifier).with_request_timeout(config.request_timeout)
}
