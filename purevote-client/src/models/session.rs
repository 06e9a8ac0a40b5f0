//! Session model - authenticated user state and transient request status.

use serde::{Deserialize, Serialize};

/// Account data returned by the identity provider on sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

/// The signed-in session. Created from an [`AuthUser`], destroyed on
/// sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

impl From<AuthUser> for Session {
    fn from(user: AuthUser) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            display_name: user.display_name,
            email_verified: user.email_verified,
        }
    }
}

/// Authentication lifecycle of the whole client.
///
/// A failed request returns to `Anonymous`; the failure itself is carried
/// by the originating form's [`AuthStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Pending,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Which auth page is currently shown while anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPage {
    Login,
    Signup,
    Reset,
}

/// Transient status of one auth form, reset at the start of every request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl AuthStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthStatus::Pending)
    }

    /// User-visible message, if the last request settled with one.
    pub fn message(&self) -> Option<&str> {
        match self {
            AuthStatus::Succeeded(msg) | AuthStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
