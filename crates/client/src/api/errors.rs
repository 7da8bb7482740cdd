//! Pipeline error taxonomy
//!
//! Produced once at the pipeline boundary; downstream callers switch on the
//! variant, never on message text.

use std::fmt;

use thiserror::Error;

/// Field-level validation violations from a 400 response, rendered one line
/// per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations(Vec<(String, String)>);

impl FieldViolations {
    /// Collect violations from the `fields` object of a failure payload.
    #[must_use]
    pub fn from_payload(payload: &serde_json::Value) -> Self {
        let Some(fields) = payload.get("fields").and_then(serde_json::Value::as_object) else {
            return Self::default();
        };

        let violations = fields
            .iter()
            .map(|(field, message)| {
                let message = match message.as_str() {
                    Some(text) => text.to_string(),
                    None => message.to_string(),
                };
                (field.clone(), message)
            })
            .collect();
        Self(violations)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw `(field, message)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in &self.0 {
            write!(f, "\n• {field}: {message}")?;
        }
        Ok(())
    }
}

/// Typed outcome of a failed request.
///
/// `SessionExpired` additionally has the side effect of clearing stored
/// credentials; callers must not assume credentials remain valid after
/// receiving it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Protected call attempted with no stored access credential; no network
    /// call was made.
    #[error("Authentication required. Please login first.")]
    AuthRequired,

    /// Terminal 401: either the endpoint did not require auth, or the
    /// already-retried call was rejected again.
    #[error("Unauthorized - Please login again")]
    Unauthorized,

    /// The refresh protocol failed; stored credentials were cleared.
    #[error("Your session has expired. Please login again.")]
    SessionExpired,

    /// 403 with the server-supplied message when present.
    #[error("{0}")]
    Forbidden(String),

    /// 404 with the server-supplied message when present.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the server-supplied message and field violations.
    #[error("{message}{fields}")]
    Invalid {
        message: String,
        fields: FieldViolations,
    },

    /// 5xx; server detail is deliberately not surfaced.
    #[error("Server error. Please try again later.")]
    Server,

    /// Any other non-2xx status, with the best available message.
    #[error("{0}")]
    RequestFailed(String),

    /// Transport-level failure; no retry is attempted.
    #[error("Network error: {0}")]
    Network(String),
}
