//! Host lifecycle signal.
//!
//! The terminal reports focus changes, which stand in for the app moving
//! between foreground and background. Interested parties register a
//! callback with [`LifecycleSignal::subscribe`] and hold the returned
//! [`LifecycleSubscription`] for as long as they want to be notified.

use crossterm::event::Event;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const CHANNEL_CAPACITY: usize = 16;

/// Where the app currently stands with respect to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Visible and focused
    Active,
    /// Not focused
    Background,
    /// Transitioning, neither foreground nor background
    Inactive,
}

impl LifecycleState {
    /// Map a terminal event to a lifecycle state, if it carries one.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::FocusGained => Some(LifecycleState::Active),
            Event::FocusLost => Some(LifecycleState::Background),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        self == LifecycleState::Active
    }
}

/// Host side of the lifecycle signal.
#[derive(Debug)]
pub struct LifecycleSignal {
    current: LifecycleState,
    tx: broadcast::Sender<LifecycleState>,
}

impl LifecycleSignal {
    /// Create a signal. The app starts in the foreground.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            current: LifecycleState::Active,
            tx,
        }
    }

    pub fn current(&self) -> LifecycleState {
        self.current
    }

    /// Record a new state. Returns false when it equals the current one,
    /// in which case nothing is broadcast.
    pub fn set(&mut self, state: LifecycleState) -> bool {
        if state == self.current {
            return false;
        }
        tracing::debug!(from = ?self.current, to = ?state, "Lifecycle transition");
        self.current = state;
        // No subscribers is fine
        let _ = self.tx.send(state);
        true
    }

    /// Invoke `on_foreground` on every transition into [`LifecycleState::Active`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe<F>(&self, mut on_foreground: F) -> LifecycleSubscription
    where
        F: FnMut() + Send + 'static,
    {
        let mut rx = self.tx.subscribe();
        let mut previous = self.current;

        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(state) => {
                        if state.is_active() && !previous.is_active() {
                            on_foreground();
                        }
                        previous = state;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Lifecycle subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        LifecycleSubscription { task: Some(task) }
    }
}

impl Default for LifecycleSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration returned by [`LifecycleSignal::subscribe`].
///
/// The callback stops firing once this is removed or dropped.
#[derive(Debug)]
pub struct LifecycleSubscription {
    task: Option<JoinHandle<()>>,
}

impl LifecycleSubscription {
    /// Release the subscription.
    pub fn remove(mut self) {
        self.release();
    }

    /// True while the listening task is running.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn release(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for LifecycleSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
