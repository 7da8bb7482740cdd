//! Credential types

use nexevent_domain::User;
use serde::{Deserialize, Serialize};

/// Document a [`crate::auth::CredentialBackend`] persists.
///
/// Slots are independent: a refresh rewrites only `access`, while login
/// rewrites the pair and logout clears everything including cached user
/// metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
