//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mut harness = CoordinatorHarness::new(
//!     MockHttpConfig::new().with_temperature(21.0).build(),
//!     InMemoryStore::new(),
//! );
//! harness.coordinator.reload().await;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use tokio::sync::mpsc;

use tempwatch::coordinator::RefreshCoordinator;
use tempwatch::models::ConnectionConfig;
use tempwatch::notifications::{Notification, Notifier};
use tempwatch::store::{CredentialStore, STORAGE_KEY};

/// Address used by most fixtures.
pub const TEST_ADDRESS: &str = "192.168.1.5:8080";

/// Token used by most fixtures.
pub const TEST_TOKEN: &str = "abc";

/// The config most tests start from.
pub fn test_config() -> ConnectionConfig {
    ConnectionConfig::new(TEST_ADDRESS, TEST_TOKEN)
}

/// In-memory backend already holding `config`.
pub fn store_with(config: &ConnectionConfig) -> InMemoryStore {
    let json = serde_json::to_string(config).unwrap();
    InMemoryStore::with_item(STORAGE_KEY, &json)
}

/// A coordinator wired to mocks, with handles to inspect them.
pub struct CoordinatorHarness {
    pub coordinator: RefreshCoordinator,
    pub client: MockHttpClient,
    pub backend: InMemoryStore,
    pub notifier: Notifier,
    pub notifications: mpsc::UnboundedReceiver<Notification>,
}

impl CoordinatorHarness {
    pub fn new(client: MockHttpClient, backend: InMemoryStore) -> Self {
        let (notifier, notifications) = Notifier::channel();
        let coordinator = RefreshCoordinator::new(
            CredentialStore::new(Arc::new(backend.clone())),
            Arc::new(client.clone()),
            notifier.clone(),
        );
        Self {
            coordinator,
            client,
            backend,
            notifier,
            notifications,
        }
    }

    /// All notifications emitted so far.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            drained.push(notification);
        }
        drained
    }
}
