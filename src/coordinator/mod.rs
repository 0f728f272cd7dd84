//! Refresh coordinator.
//!
//! Decides when a temperature fetch runs and what happens to its result.
//! A reload hydrates the connection settings from the store the first time
//! it runs in a session, then fetches. Only one reload is in flight at a
//! time; triggers arriving meanwhile are dropped.
//!
//! The coordinator owns the single [`RefreshSnapshot`] and publishes every
//! change through a `watch` channel for the UI.
//!
//! # Example
//!
//! ```ignore
//! let mut coordinator = RefreshCoordinator::new(store, client, notifier);
//! let view = coordinator.subscribe();
//!
//! match coordinator.reload().await {
//!     ReloadOutcome::Updated(reading) => println!("{}", reading.display_value()),
//!     ReloadOutcome::Failed(err) => eprintln!("{}", err),
//!     ReloadOutcome::Skipped => {}
//! }
//! ```

mod fetch;
mod state;

pub use fetch::{fetch_reading, DEFAULT_REQUEST_TIMEOUT};
pub use state::{RefreshPhase, RefreshSnapshot};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{FetchError, StoreError};
use crate::models::{ConnectionConfig, Reading};
use crate::notifications::Notifier;
use crate::store::CredentialStore;
use crate::traits::HttpClient;

/// Result of a reload trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum ReloadOutcome {
    /// A new reading replaced the previous one
    Updated(Reading),
    /// The fetch failed; the previous reading was kept
    Failed(FetchError),
    /// Another reload was already in flight
    Skipped,
}

/// Handle to a spawned fetch.
#[derive(Debug)]
pub struct ReloadHandle {
    task: JoinHandle<Result<Reading, FetchError>>,
}

impl ReloadHandle {
    /// Wait for the fetch to finish.
    pub async fn join(self) -> Result<Reading, FetchError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(FetchError::Unreachable(format!("fetch task failed: {}", e))),
        }
    }
}

pub struct RefreshCoordinator {
    store: CredentialStore,
    client: Arc<dyn HttpClient>,
    notifier: Notifier,
    request_timeout: Duration,
    state: RefreshSnapshot,
    state_tx: watch::Sender<RefreshSnapshot>,
}

impl RefreshCoordinator {
    pub fn new(store: CredentialStore, client: Arc<dyn HttpClient>, notifier: Notifier) -> Self {
        let state = RefreshSnapshot::default();
        let (state_tx, _) = watch::channel(state.clone());
        Self {
            store,
            client,
            notifier,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            state,
            state_tx,
        }
    }

    /// Set the bound on a single fetch.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read-only view of the state, updated on every change.
    pub fn subscribe(&self) -> watch::Receiver<RefreshSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> &RefreshSnapshot {
        &self.state
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.state.config
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }

    /// Load the saved config unless that already happened this session.
    ///
    /// A missing or unreadable record leaves the config empty.
    pub async fn hydrate(&mut self) {
        if self.state.hydrated {
            return;
        }

        if let Some(config) = self.store.load().await {
            self.state.config = config;
        }
        self.state.hydrated = true;
        tracing::debug!(address = %self.state.config.address, "Hydrated connection settings");
    }

    /// Begin a reload: hydrate if needed, then spawn the fetch.
    ///
    /// Returns `None` when a reload is already in flight. The caller must
    /// pass the handle's result to [`finish_reload`](Self::finish_reload).
    pub async fn start_reload(&mut self) -> Option<ReloadHandle> {
        if self.state.in_flight {
            tracing::debug!("Reload already in flight, dropping trigger");
            return None;
        }
        self.state.in_flight = true;

        if !self.state.hydrated {
            self.state.phase = RefreshPhase::CredentialsLoading;
            self.publish();
            self.hydrate().await;
        }

        self.state.phase = RefreshPhase::Fetching;
        self.publish();

        let client = Arc::clone(&self.client);
        let config = self.state.config.clone();
        let timeout = self.request_timeout;
        let task =
            tokio::spawn(async move { fetch_reading(client.as_ref(), &config, timeout).await });

        Some(ReloadHandle { task })
    }

    /// Apply the result of a fetch started by [`start_reload`](Self::start_reload).
    pub fn finish_reload(&mut self, result: Result<Reading, FetchError>) -> ReloadOutcome {
        self.state.in_flight = false;
        self.state.phase = RefreshPhase::Idle;

        let outcome = match result {
            Ok(reading) => {
                self.state.reading = Some(reading.clone());
                self.state.last_error = None;
                ReloadOutcome::Updated(reading)
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "Reload failed");
                self.notifier.error(err.notification_text());
                self.state.last_error = Some(err.clone());
                ReloadOutcome::Failed(err)
            }
        };

        self.publish();
        outcome
    }

    /// Run a whole reload and wait for it.
    pub async fn reload(&mut self) -> ReloadOutcome {
        match self.start_reload().await {
            Some(handle) => {
                let result = handle.join().await;
                self.finish_reload(result)
            }
            None => ReloadOutcome::Skipped,
        }
    }

    /// Replace the config and persist it.
    ///
    /// The in-memory config keeps the new values even if persisting fails.
    pub async fn save_config(&mut self, config: ConnectionConfig) -> Result<(), StoreError> {
        self.state.config = config.clone();
        self.state.hydrated = true;
        self.publish();

        self.store.save(&config).await
    }
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator")
            .field("request_timeout", &self.request_timeout)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, MockHttpClient, MockResponse};
    use crate::notifications::{Notification, NotificationLevel};
    use crate::store::STORAGE_KEY;
    use tokio::sync::mpsc;

    struct Fixture {
        coordinator: RefreshCoordinator,
        backend: InMemoryStore,
        client: MockHttpClient,
        notifications: mpsc::UnboundedReceiver<Notification>,
    }

    fn fixture() -> Fixture {
        let backend = InMemoryStore::with_item(STORAGE_KEY, r#"{"serverAddress":"10.0.0.5","token":"t"}"#);
        let client = MockHttpClient::new();
        let (notifier, notifications) = Notifier::channel();
        let coordinator = RefreshCoordinator::new(
            CredentialStore::new(Arc::new(backend.clone())),
            Arc::new(client.clone()),
            notifier,
        );
        Fixture {
            coordinator,
            backend,
            client,
            notifications,
        }
    }

    #[tokio::test]
    async fn test_success_updates_reading_silently() {
        let mut f = fixture();
        f.client.set_default_response(MockResponse::temperature(21.0));

        let outcome = f.coordinator.reload().await;

        assert!(matches!(outcome, ReloadOutcome::Updated(ref r) if r.value == 21.0));
        let snapshot = f.coordinator.snapshot();
        assert_eq!(snapshot.reading.as_ref().unwrap().display_value(), "21.00");
        assert!(!snapshot.in_flight);
        assert_eq!(snapshot.phase, RefreshPhase::Idle);
        assert!(f.notifications.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_hydrates_once() {
        let mut f = fixture();
        f.backend.put(STORAGE_KEY, r#"{"serverAddress":"h:1","token":"t"}"#);
        f.client.set_default_response(MockResponse::temperature(1.0));

        f.coordinator.reload().await;
        f.coordinator.reload().await;

        assert_eq!(f.backend.load_count(), 1);
        assert_eq!(f.coordinator.config(), &ConnectionConfig::new("h:1", "t"));
    }

    #[tokio::test]
    async fn test_failure_keeps_reading_and_notifies() {
        let mut f = fixture();
        f.client.set_default_response(MockResponse::temperature(19.5));
        f.coordinator.reload().await;
        let before = f.coordinator.snapshot().reading.clone();

        f.client.set_default_response(MockResponse::status(401, ""));
        let outcome = f.coordinator.reload().await;

        assert_eq!(outcome, ReloadOutcome::Failed(FetchError::InvalidToken));
        assert_eq!(f.coordinator.snapshot().reading, before);
        assert_eq!(
            f.coordinator.snapshot().last_error,
            Some(FetchError::InvalidToken)
        );

        let note = f.notifications.try_recv().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert!(note.message.contains("Invalid token!"));
    }

    #[tokio::test]
    async fn test_success_clears_last_error() {
        let mut f = fixture();
        f.client.set_default_response(MockResponse::status(503, ""));
        f.coordinator.reload().await;
        assert!(f.coordinator.snapshot().last_error.is_some());

        f.client.set_default_response(MockResponse::temperature(2.0));
        f.coordinator.reload().await;
        assert!(f.coordinator.snapshot().last_error.is_none());
    }

    #[tokio::test]
    async fn test_trigger_while_in_flight_is_dropped() {
        let mut f = fixture();
        f.client.set_default_response(MockResponse::temperature(3.0));

        let handle = f.coordinator.start_reload().await.unwrap();
        assert!(f.coordinator.snapshot().in_flight);
        assert!(f.coordinator.start_reload().await.is_none());

        let outcome = f.coordinator.finish_reload(handle.join().await);
        assert!(matches!(outcome, ReloadOutcome::Updated(_)));
        assert_eq!(f.client.request_count(), 1);

        assert!(f.coordinator.start_reload().await.is_some());
    }

    #[tokio::test]
    async fn test_watch_sees_phases() {
        let mut f = fixture();
        f.client.set_default_response(MockResponse::temperature(4.0));
        let view = f.coordinator.subscribe();

        let handle = f.coordinator.start_reload().await.unwrap();
        assert_eq!(view.borrow().phase, RefreshPhase::Fetching);
        assert!(view.borrow().hydrated);

        f.coordinator.finish_reload(handle.join().await);
        assert_eq!(view.borrow().phase, RefreshPhase::Idle);
        assert!(view.borrow().reading.is_some());
    }

    #[tokio::test]
    async fn test_save_config_survives_store_failure() {
        let mut f = fixture();
        f.backend.set_save_should_fail(true);
        let edited = ConnectionConfig::new("10.0.0.9", "new");

        let result = f.coordinator.save_config(edited.clone()).await;

        assert!(matches!(result, Err(StoreError::Write(_))));
        assert_eq!(f.coordinator.config(), &edited);
        assert!(f.coordinator.snapshot().hydrated);
    }

    #[tokio::test]
    async fn test_saved_config_is_not_overwritten_by_hydration() {
        let mut f = fixture();
        f.backend.put(STORAGE_KEY, r#"{"serverAddress":"old","token":"old"}"#);
        f.backend.set_save_should_fail(true);
        f.client.set_default_response(MockResponse::temperature(5.0));

        let _ = f.coordinator.save_config(ConnectionConfig::new("new", "t")).await;
        f.coordinator.reload().await;

        assert_eq!(f.coordinator.config().address, "new");
        assert_eq!(f.backend.load_count(), 0);
        assert!(f.client.get_requests()[0].url.starts_with("http://new/"));
    }
}
