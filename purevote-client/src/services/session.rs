//! Session state machine: anonymous vs authenticated, the active auth
//! page, and the transient status of each auth form.

use crate::models::{
    AuthPage, AuthStatus, Session, SessionState, SignupForm, UserProfile,
};
use crate::providers::{AuthStateReceiver, DocumentStore, IdentityError, IdentityProvider};
use crate::utils::{validate_login, validate_reset, validate_signup};
use std::sync::Arc;

/// Capability the controller was constructed with. When the identity
/// provider failed to initialize, the whole auth surface runs in demo
/// mode: submits acknowledge the input but nothing is persisted and no
/// session is ever established.
pub enum AuthBackend {
    Live {
        identity: Arc<dyn IdentityProvider>,
        documents: Arc<dyn DocumentStore>,
    },
    Demo,
}

impl AuthBackend {
    fn identity(&self) -> Option<Arc<dyn IdentityProvider>> {
        match self {
            AuthBackend::Live { identity, .. } => Some(identity.clone()),
            AuthBackend::Demo => None,
        }
    }

    fn live(&self) -> Option<(Arc<dyn IdentityProvider>, Arc<dyn DocumentStore>)> {
        match self {
            AuthBackend::Live {
                identity,
                documents,
            } => Some((identity.clone(), documents.clone())),
            AuthBackend::Demo => None,
        }
    }
}

pub struct SessionController {
    backend: AuthBackend,
    auth_events: Option<AuthStateReceiver>,
    state: SessionState,
    page: AuthPage,
    login_status: AuthStatus,
    signup_status: AuthStatus,
    reset_status: AuthStatus,
}

impl SessionController {
    pub fn new(backend: AuthBackend) -> Self {
        // The auth-state stream is subscribed once, up front; it is the
        // authoritative source and may force a sign-out at any time.
        let auth_events = backend.identity().map(|p| p.subscribe_auth_state());
        if auth_events.is_none() {
            tracing::warn!("Identity provider unavailable, auth running in demo mode");
        }

        Self {
            backend,
            auth_events,
            state: SessionState::Anonymous,
            page: AuthPage::Login,
            login_status: AuthStatus::Idle,
            signup_status: AuthStatus::Idle,
            reset_status: AuthStatus::Idle,
        }
    }

    /// Controller with no backend at all; every submit short-circuits.
    pub fn demo() -> Self {
        Self::new(AuthBackend::Demo)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn page(&self) -> AuthPage {
        self.page
    }

    pub fn login_status(&self) -> &AuthStatus {
        &self.login_status
    }

    pub fn signup_status(&self) -> &AuthStatus {
        &self.signup_status
    }

    pub fn reset_status(&self) -> &AuthStatus {
        &self.reset_status
    }

    /// Switch between the login/signup/reset pages, clearing any
    /// transient form status.
    pub fn switch_page(&mut self, page: AuthPage) {
        self.page = page;
        self.login_status = AuthStatus::Idle;
        self.signup_status = AuthStatus::Idle;
        self.reset_status = AuthStatus::Idle;
    }

    pub async fn submit_login(&mut self, email: &str, password: &str) {
        if self.login_status.is_pending() {
            tracing::debug!("Login already pending, submit ignored");
            return;
        }
        if let Err(err) = validate_login(email, password) {
            self.login_status = AuthStatus::Failed(err.to_string());
            return;
        }

        self.login_status = AuthStatus::Pending;

        let Some(identity) = self.backend.identity() else {
            self.login_status =
                AuthStatus::Succeeded(format!("Demo mode: Would sign in with {}", email));
            return;
        };

        self.state = SessionState::Pending;
        match identity.sign_in(email, password).await {
            Ok(user) => {
                tracing::info!(user_id = %user.user_id, "User signed in");
                self.login_status =
                    AuthStatus::Succeeded(format!("Welcome back, {}!", user.email));
                self.state = SessionState::Authenticated(user.into());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in failed");
                self.login_status = AuthStatus::Failed(sign_in_message(&err).to_string());
                self.state = SessionState::Anonymous;
            }
        }
    }

    pub async fn submit_signup(&mut self, form: &SignupForm) {
        if self.signup_status.is_pending() {
            tracing::debug!("Signup already pending, submit ignored");
            return;
        }
        // Local checks first; a rejected form never reaches the provider.
        if let Err(err) = validate_signup(form) {
            self.signup_status = AuthStatus::Failed(err.to_string());
            return;
        }

        self.signup_status = AuthStatus::Pending;

        let Some((identity, documents)) = self.backend.live() else {
            self.signup_status = AuthStatus::Succeeded(format!(
                "Demo mode: Would create account for {}",
                form.email
            ));
            return;
        };

        self.state = SessionState::Pending;
        let user = match identity.create_account(&form.email, &form.password).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Account creation failed");
                self.signup_status = AuthStatus::Failed(sign_up_message(&err).to_string());
                self.state = SessionState::Anonymous;
                return;
            }
        };

        tracing::info!(user_id = %user.user_id, "Account created");

        let display_name = format!("{} {}", form.first_name, form.last_name);
        let profile = UserProfile::from_signup(&form.first_name, &form.last_name, &form.email);

        // The account exists from here on; the session is established even
        // if the follow-up writes fail.
        let mut session = Session::from(user);
        session.display_name = Some(display_name.clone());

        let followups = async {
            identity
                .update_display_name(&session.user_id, &display_name)
                .await
                .map_err(|e| e.to_string())?;
            documents
                .write_profile(&session.user_id, &profile)
                .await
                .map_err(|e| e.to_string())
        };

        match followups.await {
            Ok(()) => {
                self.signup_status =
                    AuthStatus::Succeeded("Account created successfully!".to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, user_id = %session.user_id, "Post-signup write failed");
                self.signup_status = AuthStatus::Failed(
                    "Failed to create account. Please try again.".to_string(),
                );
            }
        }
        self.state = SessionState::Authenticated(session);
    }

    /// Request a password reset email. Always ends in a user-visible
    /// message and never changes the authenticated/anonymous state.
    pub async fn submit_password_reset(&mut self, email: &str) {
        if self.reset_status.is_pending() {
            tracing::debug!("Reset already pending, submit ignored");
            return;
        }
        if let Err(err) = validate_reset(email) {
            self.reset_status = AuthStatus::Failed(err.to_string());
            return;
        }

        self.reset_status = AuthStatus::Pending;

        let Some(identity) = self.backend.identity() else {
            self.reset_status = AuthStatus::Succeeded(format!(
                "Demo mode: Would send password reset to {}",
                email
            ));
            return;
        };

        match identity.send_password_reset(email).await {
            Ok(()) => {
                tracing::info!(email = %email, "Password reset requested");
                self.reset_status = AuthStatus::Succeeded(
                    "Password reset email sent. Check your inbox.".to_string(),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "Password reset failed");
                self.reset_status = AuthStatus::Failed(reset_message(&err).to_string());
            }
        }
    }

    /// Clear the session. Wallet and join sub-state tied to the user are
    /// cleared by the owning application context.
    pub async fn sign_out(&mut self) {
        if let Some(identity) = self.backend.identity() {
            if let Err(err) = identity.sign_out().await {
                tracing::error!(error = %err, "Error signing out");
            }
        }
        self.state = SessionState::Anonymous;
        self.login_status = AuthStatus::Idle;
        self.signup_status = AuthStatus::Idle;
        self.reset_status = AuthStatus::Idle;
    }

    /// Apply any pending change from the provider's auth-state stream.
    /// A `None` here overrides local state: the session was invalidated
    /// externally.
    pub fn poll_auth_state(&mut self) {
        let Some(rx) = self.auth_events.as_mut() else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }

        let current = rx.borrow_and_update().clone();
        match current {
            Some(user) => {
                if !self.state.is_authenticated() {
                    tracing::info!(user_id = %user.user_id, "Auth state: signed in");
                    self.state = SessionState::Authenticated(user.into());
                }
            }
            None => {
                if self.state.is_authenticated() {
                    tracing::info!("Auth state: session ended");
                }
                self.state = SessionState::Anonymous;
            }
        }
    }
}

fn sign_in_message(err: &IdentityError) -> &'static str {
    match err {
        IdentityError::InvalidEmail => "Invalid email address format",
        IdentityError::UserDisabled => "This account has been disabled",
        IdentityError::UserNotFound => "No account with this email exists",
        IdentityError::WrongPassword => "Incorrect password",
        _ => "Failed to sign in. Please try again.",
    }
}

fn sign_up_message(err: &IdentityError) -> &'static str {
    match err {
        IdentityError::EmailAlreadyInUse => "An account with this email already exists",
        IdentityError::InvalidEmail => "Invalid email address format",
        IdentityError::WeakPassword => "Password is too weak",
        _ => "Failed to create account. Please try again.",
    }
}

fn reset_message(err: &IdentityError) -> &'static str {
    match err {
        IdentityError::InvalidEmail => "Invalid email address format",
        IdentityError::UserNotFound => "No account found with this email",
        _ => "Failed to send reset email. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_mapping_per_operation() {
        assert_eq!(
            sign_in_message(&IdentityError::UserNotFound),
            "No account with this email exists"
        );
        assert_eq!(
            reset_message(&IdentityError::UserNotFound),
            "No account found with this email"
        );
        assert_eq!(
            sign_up_message(&IdentityError::EmailAlreadyInUse),
            "An account with this email already exists"
        );
        assert_eq!(
            sign_in_message(&IdentityError::Provider("boom".to_string())),
            "Failed to sign in. Please try again."
        );
    }
}
