//! Input and message handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::{App, AppMessage, Screen};
use crate::lifecycle::LifecycleState;
use crate::settings::SettingsEditor;

impl App {
    /// Handle one terminal event.
    pub async fn handle_event(&mut self, event: Event) {
        if let Some(state) = LifecycleState::from_event(&event) {
            self.lifecycle.set(state);
            return;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.mark_dirty();
                self.handle_key(key).await;
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse).await,
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    /// Handle a key press on the current screen.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Dashboard => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => {
                    self.request_reload().await;
                }
                KeyCode::Char('s') => self.open_settings(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                _ => {}
            },
            Screen::Settings => match key.code {
                KeyCode::Esc => self.close_settings(),
                KeyCode::Enter => self.save_settings().await,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.settings.next_field()
                }
                KeyCode::Backspace => self.settings.backspace(),
                KeyCode::F(2) => self.settings.toggle_token_visibility(),
                KeyCode::Char('t') if ctrl => self.settings.toggle_token_visibility(),
                KeyCode::Char('u') if ctrl => self.settings.clear_field(),
                KeyCode::Char(c) if !ctrl => self.settings.insert_char(c),
                _ => {}
            },
        }
    }

    /// Scrolling up on the dashboard is a pull-to-refresh.
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen == Screen::Dashboard && mouse.kind == MouseEventKind::ScrollUp {
            self.request_reload().await;
        }
    }

    /// Handle a message from a background task.
    pub async fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ReadingFetched(result) => {
                self.coordinator.finish_reload(result);
            }
            AppMessage::Foregrounded => {
                tracing::debug!("Terminal regained focus");
                self.request_reload().await;
            }
        }
    }

    /// Start a reload whose result arrives later as
    /// [`AppMessage::ReadingFetched`]. Returns false if one is already running.
    pub async fn request_reload(&mut self) -> bool {
        let Some(handle) = self.coordinator.start_reload().await else {
            return false;
        };

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = handle.join().await;
            let _ = tx.send(AppMessage::ReadingFetched(result));
        });

        self.mark_dirty();
        true
    }

    pub fn open_settings(&mut self) {
        self.settings = SettingsEditor::open(self.coordinator.config());
        self.screen = Screen::Settings;
    }

    pub fn close_settings(&mut self) {
        self.screen = Screen::Dashboard;
    }

    /// Save the dialog's edits. The dialog stays open either way.
    pub async fn save_settings(&mut self) {
        // The outcome is reported as a toast
        let _ = self
            .settings
            .confirm(&mut self.coordinator, &self.notifier)
            .await;
    }
}
