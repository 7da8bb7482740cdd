//! Session and authentication wire types

use serde::{Deserialize, Serialize};

use super::user::User;

/// Successful login response carrying the credential pair and user record.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub role: Option<String>,
    pub user: User,
}

/// Registration request payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl RegisterPayload {
    /// Payload with the service's default role.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            first_name: String::new(),
            last_name: String::new(),
            role: "Seeker".to_string(),
        }
    }
}

/// Successful registration response.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

/// Generic `{message}` envelope used by delete and logout endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
