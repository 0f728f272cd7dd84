//! Key-value storage trait abstraction.
//!
//! The credential store persists one record under a fixed key. This trait
//! hides where that key lives so tests can swap in an in-memory backend.

use async_trait::async_trait;

/// Storage backend errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Storage is unavailable (missing directory, locked, no home dir)
    Unavailable(String),
    /// IO error
    Io(String),
    /// The backing document could not be parsed or written as JSON
    Serialization(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Trait for string key-value storage.
///
/// # Example
///
/// ```ignore
/// use tempwatch::traits::KeyValueStore;
///
/// async fn remember<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
///     store.set_item("server-address", r#"{"serverAddress":"10.0.0.2","token":"t"}"#).await?;
///     assert!(store.get_item("server-address").await?.is_some());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing is stored under the key
    /// - `Err(error)` if the storage could not be read
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
