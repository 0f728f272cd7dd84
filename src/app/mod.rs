//! Application state for the terminal UI.
//!
//! [`App`] owns the refresh coordinator and everything the event loop needs
//! between frames. Input and background results are fed in through
//! [`App::handle_event`] and [`App::handle_message`] (see `handlers`).

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use std::time::Instant;
use tokio::sync::{mpsc, watch};

use crate::coordinator::{RefreshCoordinator, RefreshSnapshot};
use crate::lifecycle::{LifecycleSignal, LifecycleSubscription};
use crate::notifications::{Notification, Notifier, ToastQueue};
use crate::settings::SettingsEditor;
use crate::startup::AppConfig;
use crate::ui::components::next_spinner_frame;

/// Ticks between spinner frames (16ms ticks)
const SPINNER_TICKS: u64 = 6;

/// Main application state
pub struct App {
    /// Decides when to fetch and owns the refresh state
    pub coordinator: RefreshCoordinator,
    /// Read-only view of the coordinator's state
    pub view: watch::Receiver<RefreshSnapshot>,
    /// Edits in the settings dialog
    pub settings: SettingsEditor,
    /// Current screen
    pub screen: Screen,
    /// Toasts waiting to be shown
    pub toasts: ToastQueue,
    /// Handle for emitting toasts
    pub notifier: Notifier,
    /// Receiver for toasts (taken by the event loop)
    pub notification_rx: Option<mpsc::UnboundedReceiver<Notification>>,
    /// Sender for background task results
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background task results (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Foreground/background state of the terminal
    pub lifecycle: LifecycleSignal,
    lifecycle_subscription: Option<LifecycleSubscription>,
    /// Label shown above the reading
    pub sensor_label: String,
    /// Counter incremented every tick
    pub tick_count: u64,
    /// Current spinner frame
    pub spinner_frame: usize,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Flag to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create the app around a coordinator.
    ///
    /// `notifier` must be the sender paired with `notification_rx`, and the
    /// same one the coordinator was built with.
    pub fn new(
        coordinator: RefreshCoordinator,
        notifier: Notifier,
        notification_rx: mpsc::UnboundedReceiver<Notification>,
        config: &AppConfig,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let view = coordinator.subscribe();

        Self {
            coordinator,
            view,
            settings: SettingsEditor::default(),
            screen: Screen::default(),
            toasts: ToastQueue::new(config.toast_duration),
            notifier,
            notification_rx: Some(notification_rx),
            message_tx,
            message_rx: Some(message_rx),
            lifecycle: LifecycleSignal::new(),
            lifecycle_subscription: None,
            sensor_label: config.sensor_label.clone(),
            tick_count: 0,
            spinner_frame: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Copy of the current refresh state.
    pub fn snapshot(&self) -> RefreshSnapshot {
        self.view.borrow().clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Reload whenever the terminal regains focus.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach_lifecycle(&mut self) {
        let tx = self.message_tx.clone();
        let subscription = self.lifecycle.subscribe(move || {
            let _ = tx.send(AppMessage::Foregrounded);
        });
        self.lifecycle_subscription = Some(subscription);
    }

    /// Stop reacting to focus changes.
    pub fn detach_lifecycle(&mut self) {
        if let Some(subscription) = self.lifecycle_subscription.take() {
            subscription.remove();
        }
    }

    pub fn is_lifecycle_attached(&self) -> bool {
        self.lifecycle_subscription
            .as_ref()
            .is_some_and(|s| s.is_active())
    }

    /// Queue a toast for display.
    pub fn push_notification(&mut self, notification: Notification) {
        self.toasts.push(notification);
        if self.toasts.tick(Instant::now()) {
            self.mark_dirty();
        }
    }

    /// Move any toasts waiting on the channel into the queue.
    ///
    /// Only does something while the receiver has not been taken by the
    /// event loop.
    pub fn drain_notifications(&mut self) {
        let mut drained = Vec::new();
        if let Some(rx) = self.notification_rx.as_mut() {
            while let Ok(notification) = rx.try_recv() {
                drained.push(notification);
            }
        }
        for notification in drained {
            self.push_notification(notification);
        }
    }

    /// Advance animations and expire toasts. Called every 16ms.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.view.borrow().is_busy() && self.tick_count % SPINNER_TICKS == 0 {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }

        if self.toasts.tick(Instant::now()) {
            self.mark_dirty();
        }
    }
}
