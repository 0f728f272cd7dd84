//! Editor for the connection settings.

use crate::coordinator::RefreshCoordinator;
use crate::error::StoreError;
use crate::models::ConnectionConfig;
use crate::notifications::Notifier;

/// Field that receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsField {
    #[default]
    Address,
    Token,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::Address => SettingsField::Token,
            SettingsField::Token => SettingsField::Address,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Address => "Server address",
            SettingsField::Token => "Token",
        }
    }
}

/// Unsaved edits of the address and token.
///
/// Opening the editor copies the current config; nothing reaches the
/// coordinator until [`confirm`](Self::confirm).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsEditor {
    address: String,
    token: String,
    token_visible: bool,
    focused: SettingsField,
}

impl SettingsEditor {
    /// Seed the editor from `config`. The token starts hidden.
    pub fn open(config: &ConnectionConfig) -> Self {
        Self {
            address: config.address.clone(),
            token: config.token.clone(),
            token_visible: false,
            focused: SettingsField::Address,
        }
    }

    pub fn focused(&self) -> SettingsField {
        self.focused
    }

    pub fn focus(&mut self, field: SettingsField) {
        self.focused = field;
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_token_visible(&self) -> bool {
        self.token_visible
    }

    pub fn toggle_token_visibility(&mut self) {
        self.token_visible = !self.token_visible;
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focused {
            SettingsField::Address => &mut self.address,
            SettingsField::Token => &mut self.token,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value().pop();
    }

    pub fn clear_field(&mut self) {
        self.focused_value().clear();
    }

    /// Config built from the current edits.
    pub fn draft(&self) -> ConnectionConfig {
        ConnectionConfig::new(self.address.clone(), self.token.clone())
    }

    /// Save the edits through the coordinator and tell the user how it went.
    pub async fn confirm(
        &self,
        coordinator: &mut RefreshCoordinator,
        notifier: &Notifier,
    ) -> Result<(), StoreError> {
        match coordinator.save_config(self.draft()).await {
            Ok(()) => {
                notifier.success("Settings saved!");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "Saving settings failed");
                notifier.error(format!("Could not save settings: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, MockHttpClient};
    use crate::notifications::NotificationLevel;
    use crate::store::{CredentialStore, STORAGE_KEY};
    use std::sync::Arc;

    #[test]
    fn test_open_seeds_from_config() {
        let editor = SettingsEditor::open(&ConnectionConfig::new("host", "tok"));
        assert_eq!(editor.address(), "host");
        assert_eq!(editor.token(), "tok");
        assert!(!editor.is_token_visible());
        assert_eq!(editor.focused(), SettingsField::Address);
    }

    #[test]
    fn test_editing_targets_focused_field() {
        let mut editor = SettingsEditor::default();
        for c in "10.0.0.1".chars() {
            editor.insert_char(c);
        }
        editor.next_field();
        editor.insert_char('x');
        editor.insert_char('y');
        editor.backspace();

        assert_eq!(editor.draft(), ConnectionConfig::new("10.0.0.1", "x"));

        editor.next_field();
        editor.clear_field();
        assert_eq!(editor.address(), "");
        assert_eq!(editor.token(), "x");
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut editor = SettingsEditor::default();
        editor.backspace();
        assert_eq!(editor.address(), "");
    }

    #[test]
    fn test_toggle_token_visibility() {
        let mut editor = SettingsEditor::default();
        editor.toggle_token_visibility();
        assert!(editor.is_token_visible());
        editor.toggle_token_visibility();
        assert!(!editor.is_token_visible());
    }

    #[tokio::test]
    async fn test_confirm_reports_success_and_failure() {
        let backend = InMemoryStore::new();
        let (notifier, mut rx) = Notifier::channel();
        let mut coordinator = RefreshCoordinator::new(
            CredentialStore::new(Arc::new(backend.clone())),
            Arc::new(MockHttpClient::new()),
            notifier.clone(),
        );

        let editor = SettingsEditor::open(&ConnectionConfig::new("a", "b"));
        editor.confirm(&mut coordinator, &notifier).await.unwrap();
        let note = rx.try_recv().unwrap();
        assert_eq!(note.level, NotificationLevel::Success);
        assert_eq!(note.message, "Settings saved!");
        assert!(backend.peek(STORAGE_KEY).is_some());

        backend.set_save_should_fail(true);
        assert!(editor.confirm(&mut coordinator, &notifier).await.is_err());
        let note = rx.try_recv().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert!(note.message.starts_with("Could not save settings: "));
    }
}
