//! Identity provider contract - account issuance, credential checks and
//! the authoritative auth-state stream.

use crate::models::AuthUser;
use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use thiserror::Error;
use tokio::sync::watch;

/// Failure kinds reported by the identity backend. The session controller
/// maps these to per-operation user-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("account disabled")]
    UserDisabled,

    #[error("no account for email")]
    UserNotFound,

    #[error("wrong password")]
    WrongPassword,

    #[error("email already in use")]
    EmailAlreadyInUse,

    #[error("password too weak")]
    WeakPassword,

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Receiver half of the auth-state-changed stream. Subscribed once at
/// startup; delivers the current user (or `None`) on every change.
pub type AuthStateReceiver = watch::Receiver<Option<AuthUser>>;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, email: &str, password: &str)
        -> Result<AuthUser, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError>;

    async fn update_display_name(&self, user_id: &str, name: &str)
        -> Result<(), IdentityError>;

    /// Subscribe to auth-state changes. The stream is authoritative: a
    /// `None` may arrive without a local sign-out (externally invalidated
    /// session).
    fn subscribe_auth_state(&self) -> AuthStateReceiver;
}

#[derive(Debug, Clone)]
struct MockAccount {
    user_id: String,
    password: String,
    display_name: Option<String>,
    disabled: bool,
}

/// In-memory identity provider for tests and the offline demo.
pub struct MockIdentityProvider {
    accounts: DashMap<String, MockAccount>,
    auth_state: watch::Sender<Option<AuthUser>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        let (auth_state, _) = watch::channel(None);
        Self {
            accounts: DashMap::new(),
            auth_state,
        }
    }

    /// Seed an account without going through `create_account`.
    pub fn seed_account(&self, email: &str, password: &str, disabled: bool) {
        self.accounts.insert(
            email.to_string(),
            MockAccount {
                user_id: uuid::Uuid::new_v4().to_string(),
                password: password.to_string(),
                display_name: None,
                disabled,
            },
        );
    }

    /// Force-expire the session, as the backend would after invalidating
    /// it server-side.
    pub fn invalidate_session(&self) {
        let _ = self.auth_state.send(None);
    }

    fn auth_user(email: &str, account: &MockAccount) -> AuthUser {
        AuthUser {
            user_id: account.user_id.clone(),
            email: email.to_string(),
            display_name: account.display_name.clone(),
            email_verified: false,
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, IdentityError> {
        if !email.contains('@') {
            return Err(IdentityError::InvalidEmail);
        }
        if password.chars().count() < 6 {
            return Err(IdentityError::WeakPassword);
        }
        if self.accounts.contains_key(email) {
            return Err(IdentityError::EmailAlreadyInUse);
        }

        let account = MockAccount {
            user_id: uuid::Uuid::new_v4().to_string(),
            password: password.to_string(),
            display_name: None,
            disabled: false,
        };
        let user = Self::auth_user(email, &account);
        self.accounts.insert(email.to_string(), account);

        let _ = self.auth_state.send(Some(user.clone()));
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        if !email.contains('@') {
            return Err(IdentityError::InvalidEmail);
        }
        let account = self
            .accounts
            .get(email)
            .ok_or(IdentityError::UserNotFound)?;
        if account.disabled {
            return Err(IdentityError::UserDisabled);
        }
        if account.password != password {
            return Err(IdentityError::WrongPassword);
        }

        let user = Self::auth_user(email, &account);
        let _ = self.auth_state.send(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let _ = self.auth_state.send(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        if !email.contains('@') {
            return Err(IdentityError::InvalidEmail);
        }
        if !self.accounts.contains_key(email) {
            return Err(IdentityError::UserNotFound);
        }

        // Delivery is out of scope; the token only shows up in the log.
        let token = generate_reset_token();
        tracing::info!(email = %email, token = %token, "Password reset token issued");
        Ok(())
    }

    async fn update_display_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<(), IdentityError> {
        let mut found = false;
        for mut entry in self.accounts.iter_mut() {
            if entry.user_id == user_id {
                entry.display_name = Some(name.to_string());
                found = true;
                break;
            }
        }
        if !found {
            return Err(IdentityError::UserNotFound);
        }
        Ok(())
    }

    fn subscribe_auth_state(&self) -> AuthStateReceiver {
        self.auth_state.subscribe()
    }
}

fn generate_reset_token() -> String {
    let mut rng = rand::thread_rng();
    let token_bytes: [u8; 16] = rng.gen();
    hex::encode(token_bytes)
}
