//! Transient user-facing notifications (toasts).
//!
//! Producers hold a cloneable [`Notifier`]; the UI drains the receiving end
//! into a [`ToastQueue`], which shows one toast at a time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Sending half of the notification channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Create a notifier and the receiver the UI drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send a notification. Dropped silently once the receiver is gone.
    pub fn notify(&self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "Notification");
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification receiver closed");
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::new(NotificationLevel::Success, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::new(NotificationLevel::Error, message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notification::new(NotificationLevel::Info, message));
    }
}

/// FIFO of toasts with a single visible entry.
#[derive(Debug)]
pub struct ToastQueue {
    duration: Duration,
    current: Option<(Notification, Instant)>,
    pending: VecDeque<Notification>,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            pending: VecDeque::new(),
        }
    }

    /// Queue a toast. It becomes visible on the next [`tick`](Self::tick).
    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// Expire the visible toast and promote the next one.
    ///
    /// Returns true when the visible toast changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some((_, shown_at)) = &self.current {
            if now.duration_since(*shown_at) >= self.duration {
                self.current = None;
                changed = true;
            }
        }

        if self.current.is_none() {
            if let Some(next) = self.pending.pop_front() {
                self.current = Some((next, now));
                changed = true;
            }
        }

        changed
    }

    /// The toast currently on screen.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// Number of toasts waiting behind the visible one.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
