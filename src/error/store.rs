//! Errors produced by the credential store.

use thiserror::Error;

use crate::traits::StorageError;

/// Failure reading or writing the persisted connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage could not be read
    #[error("Could not read stored settings: {0}")]
    Read(String),

    /// A record exists but is not valid JSON for a connection config
    #[error("Stored settings are corrupt: {0}")]
    Corrupt(String),

    /// Storage could not be written
    #[error("Could not write settings: {0}")]
    Write(String),
}

impl StoreError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Read(_) => "E_STORE_READ",
            StoreError::Corrupt(_) => "E_STORE_CORRUPT",
            StoreError::Write(_) => "E_STORE_WRITE",
        }
    }

    pub(crate) fn read(err: StorageError) -> Self {
        StoreError::Read(err.to_string())
    }

    pub(crate) fn write(err: StorageError) -> Self {
        StoreError::Write(err.to_string())
    }
}
