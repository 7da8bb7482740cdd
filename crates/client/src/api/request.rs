//! Request descriptors

use reqwest::Method;
use serde_json::Value;

/// Immutable description of one logical request.
///
/// Descriptors carry no retry state: whether a dispatch is the original or
/// the post-refresh retry is a pipeline-internal state-machine parameter, so
/// a retried dispatch can only be produced by the refresh-and-retry step.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Path relative to the configured base URL (e.g. `"events/"`).
    pub endpoint: String,
    pub method: Method,
    /// Optional JSON payload; sets `Content-Type: application/json`.
    pub body: Option<Value>,
    /// When true, the pipeline rejects the call locally unless an access
    /// credential is stored, and a 401 triggers the refresh protocol.
    pub requires_auth: bool,
}

impl ApiRequest {
    /// Descriptor for the given method and endpoint, public by default.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), method, body: None, requires_auth: false }
    }

    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    #[must_use]
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    #[must_use]
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    #[must_use]
    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Mark the call as requiring authentication.
    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_public_by_default() {
        let request = ApiRequest::get("events/");
        assert!(!request.requires_auth);
        assert!(request.body.is_none());
        assert_eq!(request.method, Method::GET);
    }

    #[test]
    fn builder_sets_auth_and_body() {
        let request =
            ApiRequest::post("events/create/").json(serde_json::json!({"name": "n"})).authenticated();
        assert!(request.requires_auth);
        assert_eq!(request.body.unwrap()["name"], "n");
    }
}
