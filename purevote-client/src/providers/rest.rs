//! HTTP adapter for a hosted identity backend.
//!
//! Speaks the backend's JSON account API and translates its error codes
//! into [`IdentityError`] kinds. Connection failures surface as
//! `IdentityError::Provider`; no request is retried.

use crate::models::AuthUser;
use crate::providers::identity::{AuthStateReceiver, IdentityError, IdentityProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct RestIdentitySettings {
    /// Base URL of the identity API, without a trailing slash.
    pub api_url: String,
    /// Project API key, appended to every call.
    pub api_key: String,
}

pub struct RestIdentityProvider {
    client: Client,
    settings: RestIdentitySettings,
    auth_state: watch::Sender<Option<AuthUser>>,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
    #[serde(rename = "emailVerified", default)]
    email_verified: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl RestIdentityProvider {
    pub fn new(settings: RestIdentitySettings) -> Self {
        tracing::info!(api_url = %settings.api_url, "Identity API client configured");
        let (auth_state, _) = watch::channel(None);
        Self {
            client: Client::new(),
            settings,
            auth_state,
        }
    }

    async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, IdentityError> {
        let url = format!(
            "{}/v1/accounts:{}?key={}",
            self.settings.api_url, endpoint, self.settings.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %endpoint, "Identity API request failed");
                IdentityError::Provider(e.to_string())
            })?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| IdentityError::Provider(e.to_string()))
        } else {
            let error: ApiErrorBody = response
                .json()
                .await
                .map_err(|e| IdentityError::Provider(e.to_string()))?;
            Err(map_error_code(&error.error.message))
        }
    }

    fn account_from(&self, value: serde_json::Value) -> Result<AuthUser, IdentityError> {
        let account: AccountResponse =
            serde_json::from_value(value).map_err(|e| IdentityError::Provider(e.to_string()))?;
        Ok(AuthUser {
            user_id: account.local_id,
            email: account.email,
            display_name: account.display_name,
            email_verified: account.email_verified,
        })
    }
}

/// Backend error codes, per the hosted API's account endpoints.
fn map_error_code(code: &str) -> IdentityError {
    // Codes can carry a trailing reason ("TOO_MANY_ATTEMPTS_TRY_LATER :
    // ..."), so match on the leading token.
    let token = code.split_whitespace().next().unwrap_or(code);
    match token {
        "INVALID_EMAIL" => IdentityError::InvalidEmail,
        "USER_DISABLED" => IdentityError::UserDisabled,
        "EMAIL_NOT_FOUND" => IdentityError::UserNotFound,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => IdentityError::WrongPassword,
        "EMAIL_EXISTS" => IdentityError::EmailAlreadyInUse,
        "WEAK_PASSWORD" => IdentityError::WeakPassword,
        other => IdentityError::Provider(other.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, IdentityError> {
        let value = self
            .post(
                "signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let user = self.account_from(value)?;
        tracing::info!(user_id = %user.user_id, "Account created");
        let _ = self.auth_state.send(Some(user.clone()));
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        let value = self
            .post(
                "signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let user = self.account_from(value)?;
        tracing::info!(user_id = %user.user_id, "User signed in");
        let _ = self.auth_state.send(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        // The backend keeps no server-side session for this client; the
        // local auth-state stream is the only thing to clear.
        let _ = self.auth_state.send(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        self.post(
            "sendOobCode",
            serde_json::json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;

        tracing::info!(email = %email, "Password reset email requested");
        Ok(())
    }

    async fn update_display_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<(), IdentityError> {
        self.post(
            "update",
            serde_json::json!({
                "localId": user_id,
                "displayName": name,
            }),
        )
        .await?;

        tracing::info!(user_id = %user_id, "Display name updated");
        Ok(())
    }

    fn subscribe_auth_state(&self) -> AuthStateReceiver {
        self.auth_state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(map_error_code("EMAIL_NOT_FOUND"), IdentityError::UserNotFound);
        assert_eq!(map_error_code("INVALID_PASSWORD"), IdentityError::WrongPassword);
        assert_eq!(map_error_code("EMAIL_EXISTS"), IdentityError::EmailAlreadyInUse);
        assert_eq!(
            map_error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            IdentityError::WeakPassword
        );
        assert_eq!(
            map_error_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
            IdentityError::Provider("TOO_MANY_ATTEMPTS_TRY_LATER".to_string())
        );
    }
}
