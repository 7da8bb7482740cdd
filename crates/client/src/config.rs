//! Client configuration

use std::time::Duration;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoints are resolved against
    /// (e.g. `"https://nexevent.example.com/api/"`).
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Optional user agent for outgoing requests.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the given base URL.
    ///
    /// A trailing slash is appended when missing so relative endpoints
    /// concatenate cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url, ..Self::default() }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent for outgoing requests.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}
