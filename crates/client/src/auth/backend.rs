//! Persistence backends for the credential store

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use super::types::StoredCredentials;

/// Errors from a credential backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage could not be read or written.
    #[error("credential storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document could not be encoded or decoded.
    #[error("credential storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence for [`super::CredentialStore`].
///
/// Implementations hold one credential document per backend instance; there
/// is no account namespacing. `clear` must be idempotent.
#[async_trait]
pub trait CredentialBackend: Send + Sync {
    /// Load the stored document, `None` when nothing is stored.
    async fn load(&self) -> Result<Option<StoredCredentials>, StoreError>;

    /// Overwrite the stored document.
    async fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError>;

    /// Remove the stored document. Succeeds when already empty.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RwLock<Option<StoredCredentials>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<StoredCredentials>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError> {
        *self.slot.write().await = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

/// File-backed backend persisting a JSON document.
///
/// Survives process restarts; the session analog of reload-surviving browser
/// storage. The parent directory is created on first save.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CredentialBackend for FileBackend {
    async fn load(&self) -> Result<Option<StoredCredentials>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let credentials: StoredCredentials = serde_json::from_str(&content)?;
        Ok(Some(credentials))
    }

    async fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(credentials)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), "credentials written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredCredentials {
        StoredCredentials {
            access: Some("A1".to_string()),
            refresh: Some("R1".to_string()),
            user: None,
        }
    }

    #[tokio::test]
    async fn memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.load().await.unwrap().is_none());

        backend.save(&sample()).await.unwrap();
        assert_eq!(backend.load().await.unwrap(), Some(sample()));

        backend.clear().await.unwrap();
        assert!(backend.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("credentials.json"));

        assert!(backend.load().await.unwrap().is_none());

        backend.save(&sample()).await.unwrap();
        assert_eq!(backend.load().await.unwrap(), Some(sample()));

        backend.clear().await.unwrap();
        assert!(backend.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_backend_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.json");

        FileBackend::new(&path).save(&sample()).await.unwrap();

        let reopened = FileBackend::new(&path);
        assert_eq!(reopened.load().await.unwrap(), Some(sample()));
    }

    #[tokio::test]
    async fn file_backend_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("credentials.json"));

        backend.clear().await.unwrap();
        backend.save(&sample()).await.unwrap();
        backend.clear().await.unwrap();
        backend.clear().await.unwrap();
    }
}
