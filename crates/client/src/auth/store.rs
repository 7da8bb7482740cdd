//! Credential store

use std::sync::Arc;

use nexevent_domain::User;
use tracing::{debug, info};

use super::backend::{CredentialBackend, MemoryBackend, StoreError};
use super::types::StoredCredentials;

/// Shared store for the access/refresh credential pair and cached user
/// metadata.
///
/// Reads never fail: backend errors degrade to "absent" so callers can treat
/// `access()`/`refresh()` as plain lookups. Writes surface [`StoreError`] to
/// the caller; `clear` swallows backend failures and is idempotent.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn CredentialBackend>,
}

impl CredentialStore {
    /// Create a store over the given persistence backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CredentialBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Overwrite both credentials unconditionally.
    ///
    /// Cached user metadata is preserved; token structure is not validated.
    pub async fn set(&self, access: &str, refresh: &str) -> Result<(), StoreError> {
        let mut credentials = self.snapshot().await;
        credentials.access = Some(access.to_string());
        credentials.refresh = Some(refresh.to_string());
        self.backend.save(&credentials).await?;
        debug!("credential pair stored");
        Ok(())
    }

    /// Overwrite only the access credential.
    ///
    /// Used by the refresh protocol; the refresh credential and user metadata
    /// are untouched.
    pub async fn set_access(&self, access: &str) -> Result<(), StoreError> {
        let mut credentials = self.snapshot().await;
        credentials.access = Some(access.to_string());
        self.backend.save(&credentials).await?;
        debug!("access credential replaced");
        Ok(())
    }

    /// Cache the user record returned at login.
    pub async fn set_user(&self, user: &User) -> Result<(), StoreError> {
        let mut credentials = self.snapshot().await;
        credentials.user = Some(user.clone());
        self.backend.save(&credentials).await
    }

    /// Stored access credential, if any.
    pub async fn access(&self) -> Option<String> {
        self.snapshot().await.access
    }

    /// Stored refresh credential, if any.
    pub async fn refresh(&self) -> Option<String> {
        self.snapshot().await.refresh
    }

    /// Cached user record, if any.
    pub async fn user(&self) -> Option<User> {
        self.snapshot().await.user
    }

    /// True iff an access credential is stored.
    ///
    /// Local signal only: it does not guarantee the remote service still
    /// accepts the credential.
    pub async fn is_present(&self) -> bool {
        self.access().await.is_some()
    }

    /// Remove both credentials and cached user metadata.
    ///
    /// Idempotent; safe to call when already empty.
    pub async fn clear(&self) {
        if let Err(err) = self.backend.clear().await {
            debug!(error = %err, "credential clear failed");
            return;
        }
        info!("credentials cleared");
    }

    async fn snapshot(&self) -> StoredCredentials {
        match self.backend.load().await {
            Ok(Some(credentials)) => credentials,
            Ok(None) => StoredCredentials::default(),
            Err(err) => {
                debug!(error = %err, "failed to load stored credentials");
                StoredCredentials::default()
            }
        }
    }
}
