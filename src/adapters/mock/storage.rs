//! In-memory key-value store for testing.
//!
//! Stores items in memory and can be told to fail reads or writes, so
//! tests can exercise storage-unavailable paths without touching disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{KeyValueStore, StorageError};

/// In-memory key-value store for testing.
///
/// # Example
///
/// ```ignore
/// use tempwatch::adapters::mock::InMemoryStore;
/// use tempwatch::traits::KeyValueStore;
///
/// let store = InMemoryStore::new();
/// store.set_item("server-address", "{}").await?;
/// assert_eq!(store.get_item("server-address").await?, Some("{}".to_string()));
///
/// store.set_save_should_fail(true);
/// assert!(store.set_item("server-address", "{}").await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Stored items
    items: Arc<Mutex<HashMap<String, String>>>,
    /// Whether writes should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether reads should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Artificial latency applied to reads
    load_delay: Arc<Mutex<Option<Duration>>>,
    /// Number of reads performed
    load_count: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one item already present.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.put(key, value);
        store
    }

    /// Configure whether writes should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether reads should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Delay every read by `delay`.
    pub fn set_load_delay(&self, delay: Duration) {
        *self.load_delay.lock().unwrap() = Some(delay);
    }

    /// Number of reads performed so far.
    pub fn load_count(&self) -> usize {
        *self.load_count.lock().unwrap()
    }

    /// Get an item synchronously (for testing).
    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    /// Set an item synchronously (for testing).
    pub fn put(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        *self.load_count.lock().unwrap() += 1;

        let delay = *self.load_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.load_should_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("Mock load failure".to_string()));
        }

        Ok(self.peek(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("Mock save failure".to_string()));
        }

        self.put(key, value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("Mock remove failure".to_string()));
        }

        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}
