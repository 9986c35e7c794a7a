//! Client for the remote authentication API.
//!
//! Same-origin JSON endpoints under `/api/auth`. Every non-success status is
//! mapped onto [`AuthError`] so the pages show a category, never the raw
//! server response.

use crate::config::AUTH_API_PATH;
use crate::session::StoredUser;
use leptos::logging::error;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Invalid request data")]
    InvalidInput,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Access denied")]
    Forbidden,
    #[error("Service not found")]
    NotFound,
    #[error("Too many requests. Please try again later.")]
    RateLimited,
    #[error("Server error. Please try again later.")]
    Server,
    #[error("Service temporarily unavailable")]
    Unavailable,
    #[error("Network error. Please check your connection and try again.")]
    Network,
    #[error("Unexpected response from the authentication service")]
    Malformed,
    #[error("{0}")]
    Rejected(String),
}

/// HTTP status to user-facing category.
fn categorize(status: StatusCode) -> AuthError {
    match status {
        StatusCode::BAD_REQUEST => AuthError::InvalidInput,
        StatusCode::UNAUTHORIZED => AuthError::InvalidCredentials,
        StatusCode::FORBIDDEN => AuthError::Forbidden,
        StatusCode::NOT_FOUND => AuthError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => AuthError::RateLimited,
        StatusCode::SERVICE_UNAVAILABLE => AuthError::Unavailable,
        status if status.is_server_error() => AuthError::Server,
        _ => AuthError::Malformed,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SigninCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl AuthUser {
    pub fn to_stored(&self) -> StoredUser {
        StoredUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub token: String,
    pub user: AuthUser,
    pub expires_in: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AuthData>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponse {
    /// Unwraps the payload of a nominally successful response; a `success:
    /// false` body becomes a rejection with the server's public message.
    pub fn into_data(self) -> Result<AuthData, AuthError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(AuthError::Rejected(
                self.message
                    .or(self.error)
                    .unwrap_or_else(|| "Authentication failed".to_owned()),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthData {
    pub redirect_url: String,
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<OAuthData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProfileData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

pub struct AuthService {
    client: reqwest::Client,
    base: String,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    /// Service rooted at the page's own origin.
    pub fn new() -> Self {
        let location = leptos::window().location();
        let protocol = location.protocol().unwrap_or_else(|_| "https:".to_owned());
        let host = location.host().unwrap_or_default();
        Self::with_base(format!("{protocol}//{host}{AUTH_API_PATH}"))
    }

    pub fn with_base(base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, AuthError> {
        let response = response.map_err(|err| {
            error!("auth request failed: {err}");
            AuthError::Network
        })?;
        let status = response.status();
        if !status.is_success() {
            error!("auth request rejected with status {status}");
            return Err(categorize(status));
        }
        response.json().await.map_err(|err| {
            error!("auth response did not decode: {err}");
            AuthError::Malformed
        })
    }

    pub async fn signin(&self, credentials: &SigninCredentials) -> Result<AuthResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/signin"))
            .json(credentials)
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn signup(&self, data: &SignupData) -> Result<AuthResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/signup"))
            .json(data)
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn signout(&self, token: &str) -> Result<StatusResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/signout"))
            .bearer_auth(token)
            .send()
            .await;
        self.decode(sent).await
    }

    /// Fetch the redirect target that starts the provider's OAuth flow.
    pub async fn oauth_redirect(&self, provider: &str) -> Result<OAuthResponse, AuthError> {
        let sent = self
            .client
            .get(self.endpoint(&format!("/{provider}")))
            .send()
            .await;
        self.decode(sent).await
    }

    /// Exchange the provider callback's code/state pair for a session.
    pub async fn oauth_callback(
        &self,
        provider: &str,
        code: &str,
        state: &str,
    ) -> Result<AuthResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint(&format!("/oauth/{provider}/callback")))
            .json(&serde_json::json!({ "code": code, "state": state }))
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn forgot_password(&self, username: &str) -> Result<StatusResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/forgot-password"))
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<StatusResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/reset-password"))
            .json(&serde_json::json!({ "token": token, "password": password }))
            .send()
            .await;
        self.decode(sent).await
    }

    /// Soft check: network and decode failures report "not valid" instead of
    /// erroring, so a flaky connection never signs anyone out by accident.
    pub async fn verify_token(&self, token: &str) -> VerifyResponse {
        let sent = self
            .client
            .get(self.endpoint("/verify"))
            .bearer_auth(token)
            .send()
            .await;
        match self.decode::<VerifyResponse>(sent).await {
            Ok(verdict) => verdict,
            Err(AuthError::Network) | Err(AuthError::Server) | Err(AuthError::Unavailable) => {
                VerifyResponse {
                    valid: true,
                    user: None,
                    expires_in: None,
                }
            }
            Err(_) => VerifyResponse {
                valid: false,
                user: None,
                expires_in: None,
            },
        }
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let sent = self
            .client
            .post(self.endpoint("/refresh"))
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn get_profile(&self, token: &str) -> Result<ProfileResponse, AuthError> {
        let sent = self
            .client
            .get(self.endpoint("/profile"))
            .bearer_auth(token)
            .send()
            .await;
        self.decode(sent).await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<ProfileResponse, AuthError> {
        let sent = self
            .client
            .put(self.endpoint("/profile"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await;
        self.decode(sent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_their_categories() {
        assert_eq!(categorize(StatusCode::BAD_REQUEST), AuthError::InvalidInput);
        assert_eq!(
            categorize(StatusCode::UNAUTHORIZED),
            AuthError::InvalidCredentials
        );
        assert_eq!(categorize(StatusCode::FORBIDDEN), AuthError::Forbidden);
        assert_eq!(categorize(StatusCode::NOT_FOUND), AuthError::NotFound);
        assert_eq!(
            categorize(StatusCode::TOO_MANY_REQUESTS),
            AuthError::RateLimited
        );
        assert_eq!(
            categorize(StatusCode::SERVICE_UNAVAILABLE),
            AuthError::Unavailable
        );
        assert_eq!(categorize(StatusCode::INTERNAL_SERVER_ERROR), AuthError::Server);
        assert_eq!(categorize(StatusCode::BAD_GATEWAY), AuthError::Server);
        assert_eq!(categorize(StatusCode::IM_A_TEAPOT), AuthError::Malformed);
    }

    #[test]
    fn error_messages_stay_generic() {
        // Nothing internal leaks to the user.
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::Network.to_string(),
            "Network error. Please check your connection and try again."
        );
    }

    #[test]
    fn endpoints_join_onto_the_base() {
        let service = AuthService::with_base("https://example.test/api/auth".to_owned());
        assert_eq!(
            service.endpoint("/signin"),
            "https://example.test/api/auth/signin"
        );
        assert_eq!(
            service.endpoint("/oauth/google/callback"),
            "https://example.test/api/auth/oauth/google/callback"
        );
    }

    #[test]
    fn success_response_yields_payload() {
        let body = r#"{
            "success": true,
            "data": {
                "token": "tok",
                "user": {"id": "1", "username": "n", "email": "n@example.com", "role": "client"},
                "expiresIn": "7d"
            }
        }"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        let data = response.into_data().unwrap();
        assert_eq!(data.token, "tok");
        assert_eq!(data.user.role, "client");
        assert_eq!(data.refresh_token, None);
    }

    #[test]
    fn declined_response_becomes_rejection() {
        let body = r#"{"success": false, "message": "Account locked"}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_data().unwrap_err(),
            AuthError::Rejected("Account locked".to_owned())
        );
    }
}
