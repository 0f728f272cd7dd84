//! File-backed key-value storage adapter.
//!
//! All keys live in a single JSON document (`storage.json` in the data
//! directory). Each value is an opaque string, so a record serialized to
//! JSON by the caller ends up double-encoded inside the document.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// File name of the storage document inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

type Document = BTreeMap<String, String>;

/// File-based key-value store.
///
/// # Example
///
/// ```ignore
/// use tempwatch::adapters::FileKeyValueStore;
///
/// let store = FileKeyValueStore::in_dir(&config.data_dir);
/// store.set_item("server-address", "{}").await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `storage.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORAGE_FILE))
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<Document>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Some(Document::new()));
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Read the document for modification. A corrupt document is replaced
    /// rather than blocking every future write.
    async fn document_for_write(&self) -> Result<Document, StorageError> {
        match self.read_document().await {
            Ok(doc) => Ok(doc.unwrap_or_default()),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing corrupt storage document");
                Ok(Document::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_document(&self, doc: &Document) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written document
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let doc = self.read_document().await?;
        Ok(doc.and_then(|mut doc| doc.remove(key)))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut doc = self.document_for_write().await?;
        doc.insert(key.to_string(), value.to_string());
        self.write_document(&doc).await?;
        tracing::debug!(path = %self.path.display(), key, "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut doc = match self.read_document().await? {
            Some(doc) => doc,
            None => return Ok(()),
        };
        if doc.remove(key).is_some() {
            self.write_document(&doc).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> FileKeyValueStore {
        FileKeyValueStore::in_dir(&temp_dir.path().join("data"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        assert_eq!(store.get_item("server-address").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set_item("k", "v").await.unwrap();

        assert!(store.path().exists());
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites_and_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set_item("a", "1").await.unwrap();
        store.set_item("b", "2").await.unwrap();
        store.set_item("a", "3").await.unwrap();

        assert_eq!(store.get_item("a").await.unwrap(), Some("3".to_string()));
        assert_eq!(store.get_item("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not json").unwrap();

        let result = store.get_item("k").await;
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_write_replaces_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{{{{").unwrap();

        store.set_item("k", "v").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_remove_item() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.remove_item("missing").await.unwrap();

        store.set_item("k", "v").await.unwrap();
        store.remove_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::create_dir_all(store.path()).unwrap();

        assert!(matches!(store.get_item("k").await, Err(StorageError::Io(_))));
        assert!(store.set_item("k", "v").await.is_err());
    }
}
