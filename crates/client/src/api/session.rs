//! Session endpoints: register, login, logout

use nexevent_domain::{LoginResponse, RegisterPayload, RegisterResponse};
use serde_json::json;
use tracing::{debug, info};

use super::client::ApiClient;
use super::errors::ApiError;
use super::request::ApiRequest;

impl ApiClient {
    /// Register a new user. Does not log in.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResponse, ApiError> {
        self.post("register/", payload, false).await
    }

    /// Authenticate and store the returned credential pair and user record.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post("login/", &json!({ "username": username, "password": password }), false)
            .await?;

        self.store()
            .set(&response.access, &response.refresh)
            .await
            .map_err(|err| ApiError::RequestFailed(format!("Error: failed to persist credentials: {err}")))?;
        if let Err(err) = self.store().set_user(&response.user).await {
            debug!(error = %err, "failed to cache user record");
        }

        info!(username = %response.user.username, "login successful");
        Ok(response)
    }

    /// True iff an access credential is stored.
    ///
    /// Local check only; the remote service may still reject the credential.
    pub async fn is_logged_in(&self) -> bool {
        self.store().is_present().await
    }

    /// Notify the service and clear stored credentials.
    ///
    /// The notification is best-effort: any failure is logged and the local
    /// clear happens regardless.
    pub async fn logout(&self) {
        let request = ApiRequest::post("logout/").json(json!({}));
        if let Err(err) = self.execute_value(request).await {
            debug!(error = %err, "logout notification failed, clearing locally anyway");
        }

        self.store().clear().await;
        info!("logged out");
    }
}
