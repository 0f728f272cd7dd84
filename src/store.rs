//! Persistence of the connection settings.
//!
//! The settings are stored as a single JSON record under a fixed key in a
//! [`KeyValueStore`], so the on-disk shape is `{"serverAddress": "...",
//! "token": "..."}` regardless of which backend holds it.

use std::sync::Arc;

use crate::error::StoreError;
use crate::models::ConnectionConfig;
use crate::traits::KeyValueStore;

/// Key the connection record is stored under.
pub const STORAGE_KEY: &str = "server-address";

/// Loads and saves the [`ConnectionConfig`].
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    /// Create a store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load the saved config.
    ///
    /// Returns `None` when nothing has been saved yet, and also when the
    /// backend fails or the record is corrupt. Failures are logged.
    pub async fn load(&self) -> Option<ConnectionConfig> {
        match self.try_load().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "Ignoring stored settings");
                None
            }
        }
    }

    /// Load the saved config, surfacing backend and decoding failures.
    pub async fn try_load(&self) -> Result<Option<ConnectionConfig>, StoreError> {
        let raw = self
            .backend
            .get_item(STORAGE_KEY)
            .await
            .map_err(StoreError::read)?;

        match raw {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string())),
        }
    }

    /// Persist the config, replacing any previous record.
    pub async fn save(&self, config: &ConnectionConfig) -> Result<(), StoreError> {
        let json = serde_json::to_string(config).map_err(|e| StoreError::Write(e.to_string()))?;
        self.backend
            .set_item(STORAGE_KEY, &json)
            .await
            .map_err(StoreError::write)?;
        tracing::info!(address = %config.address, "Saved connection settings");
        Ok(())
    }

    /// Remove the saved record.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.backend
            .remove_item(STORAGE_KEY)
            .await
            .map_err(StoreError::write)
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
