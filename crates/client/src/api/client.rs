//! Request pipeline execution and classification

use std::sync::Arc;

use reqwest::{header, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::errors::{ApiError, FieldViolations};
use super::request::ApiRequest;
use crate::auth::CredentialStore;
use crate::config::ClientConfig;
use crate::http::{HttpClient, HttpError};

/// Refresh endpoint path relative to the base URL.
const REFRESH_ENDPOINT: &str = "token/refresh/";

/// Which dispatch of the original descriptor is in flight.
///
/// `Retry` is only produced by the refresh-and-retry step, so a second
/// refresh for the same logical call is unreachable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Retry,
}

/// Client executing logical requests against the NexEvent service.
///
/// Holds the transport, the shared [`CredentialStore`] and the
/// [`ClientConfig`]. Cheap to clone via the shared store; one instance per
/// session is the expected shape.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    store: Arc<CredentialStore>,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client over the given configuration and credential store.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, store: Arc<CredentialStore>) -> Result<Self, HttpError> {
        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build()?;

        Ok(Self { http, store, config })
    }

    /// The credential store this client reads and writes.
    #[must_use]
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute one logical request and return the parsed response body.
    ///
    /// This is the single pipeline entry point; the typed verb helpers are
    /// thin descriptor builders over it.
    ///
    /// # Errors
    /// Returns the classified [`ApiError`] for any non-2xx outcome.
    pub async fn execute_value(&self, request: ApiRequest) -> Result<Value, ApiError> {
        if request.requires_auth && !self.store.is_present().await {
            warn!(endpoint = %request.endpoint, "protected call without stored credentials");
            return Err(ApiError::AuthRequired);
        }

        let mut attempt = Attempt::Initial;
        loop {
            let (status, payload) = self.dispatch(&request).await?;

            if status == StatusCode::UNAUTHORIZED
                && request.requires_auth
                && attempt == Attempt::Initial
            {
                debug!(endpoint = %request.endpoint, "access credential rejected, refreshing");
                self.refresh_access().await?;
                attempt = Attempt::Retry;
                continue;
            }

            return Self::interpret(status, payload);
        }
    }

    /// Execute one logical request and deserialize the success payload.
    ///
    /// # Errors
    /// Returns the classified [`ApiError`], or [`ApiError::RequestFailed`]
    /// when the success payload does not match `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let value = self.execute_value(request).await?;
        serde_json::from_value(value).map_err(|err| {
            ApiError::RequestFailed(format!("Error: malformed response payload: {err}"))
        })
    }

    /// GET helper.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        self.execute(Self::descriptor(ApiRequest::get(endpoint), requires_auth)).await
    }

    /// POST helper with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::post(endpoint).json(Self::to_body(body)?);
        self.execute(Self::descriptor(request, requires_auth)).await
    }

    /// PUT helper with a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::put(endpoint).json(Self::to_body(body)?);
        self.execute(Self::descriptor(request, requires_auth)).await
    }

    /// PATCH helper with a JSON body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::patch(endpoint).json(Self::to_body(body)?);
        self.execute(Self::descriptor(request, requires_auth)).await
    }

    /// DELETE helper.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        self.execute(Self::descriptor(ApiRequest::delete(endpoint), requires_auth)).await
    }

    fn descriptor(request: ApiRequest, requires_auth: bool) -> ApiRequest {
        if requires_auth {
            request.authenticated()
        } else {
            request
        }
    }

    fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|err| {
            ApiError::RequestFailed(format!("Error: failed to encode request body: {err}"))
        })
    }

    /// Send one dispatch of the descriptor and read its payload.
    async fn dispatch(&self, request: &ApiRequest) -> Result<(StatusCode, Value), ApiError> {
        let url = self.endpoint_url(&request.endpoint);
        let mut builder = self.http.request(request.method.clone(), &url);

        // Attached whenever present so public endpoints carry optional identity.
        if let Some(access) = self.store.access().await {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {access}"));
        }

        if let Some(body) = &request.body {
            builder = builder.header(header::CONTENT_TYPE, "application/json").json(body);
        }

        let response =
            self.http.send(builder).await.map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        let payload = Self::read_payload(status, response).await;
        Ok((status, payload))
    }

    /// Parse the response body, degrading to a synthesized failure payload on
    /// malformed bodies. Never errors.
    async fn read_payload(status: StatusCode, response: Response) -> Value {
        match response.json::<Value>().await {
            Ok(payload) => payload,
            Err(_) => {
                warn!(%status, "response body is not JSON, synthesizing payload");
                json!({
                    "error": format!("HTTP {}", status.as_u16()),
                    "detail": "Invalid response from server",
                })
            }
        }
    }

    fn interpret(status: StatusCode, payload: Value) -> Result<Value, ApiError> {
        if status.is_success() {
            return Ok(payload);
        }
        Err(Self::classify_failure(status, &payload))
    }

    fn classify_failure(status: StatusCode, payload: &Value) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(error_message(payload).unwrap_or_else(
                || "You do not have permission to perform this action".to_string(),
            )),
            StatusCode::NOT_FOUND => ApiError::NotFound(
                error_message(payload)
                    .unwrap_or_else(|| "The requested resource was not found".to_string()),
            ),
            StatusCode::BAD_REQUEST => ApiError::Invalid {
                message: error_message(payload).unwrap_or_else(|| "Invalid request".to_string()),
                fields: FieldViolations::from_payload(payload),
            },
            status if status.is_server_error() => ApiError::Server,
            status => {
                let mut message = error_message(payload)
                    .or_else(|| detail_message(payload))
                    .unwrap_or_else(|| format!("Error: {}", status.as_u16()));
                let fields = FieldViolations::from_payload(payload);
                if !fields.is_empty() {
                    message = format!("{message}{fields}");
                }
                ApiError::RequestFailed(message)
            }
        }
    }

    /// Run the refresh protocol: mint a new access credential from the stored
    /// refresh credential.
    ///
    /// Every failure path clears the store and collapses to
    /// [`ApiError::SessionExpired`]; refresh failure is not distinguished
    /// from "service unreachable" from the caller's perspective.
    async fn refresh_access(&self) -> Result<(), ApiError> {
        let Some(refresh) = self.store.refresh().await else {
            warn!("no refresh credential stored");
            self.store.clear().await;
            return Err(ApiError::SessionExpired);
        };

        // Only the refresh credential goes to this endpoint; the access
        // credential never does.
        let builder = self
            .http
            .request(Method::POST, self.endpoint_url(REFRESH_ENDPOINT))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&json!({ "refresh": refresh }));

        let response = match self.http.send(builder).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "refresh call failed at the transport level");
                self.store.clear().await;
                return Err(ApiError::SessionExpired);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "refresh rejected by the service");
            self.store.clear().await;
            return Err(ApiError::SessionExpired);
        }

        let payload = Self::read_payload(status, response).await;
        let Some(access) = payload.get("access").and_then(Value::as_str) else {
            warn!("refresh response carried no access credential");
            self.store.clear().await;
            return Err(ApiError::SessionExpired);
        };

        if let Err(err) = self.store.set_access(access).await {
            warn!(error = %err, "failed to persist refreshed access credential");
            self.store.clear().await;
            return Err(ApiError::SessionExpired);
        }

        info!("access credential refreshed");
        Ok(())
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint.trim_start_matches('/'))
    }
}

fn error_message(payload: &Value) -> Option<String> {
    payload.get("error").and_then(Value::as_str).map(str::to_string)
}

fn detail_message(payload: &Value) -> Option<String> {
    payload.get("detail").and_then(Value::as_str).map(str::to_string)
}
