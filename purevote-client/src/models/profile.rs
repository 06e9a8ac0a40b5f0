//! User profile record written to the external document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider tag recorded on email/password accounts.
pub const PROVIDER_EMAIL: &str = "email";

/// Profile document keyed by user id in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub provider: String,
}

impl UserProfile {
    /// Build the initial profile for a freshly created email account.
    pub fn from_signup(first_name: &str, last_name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            display_name: format!("{} {}", first_name, last_name),
            email: email.to_string(),
            created_at: now,
            last_login: now,
            provider: PROVIDER_EMAIL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signup_sets_display_name_and_provider() {
        let profile = UserProfile::from_signup("Ada", "Obi", "ada@example.com");

        assert_eq!(profile.display_name, "Ada Obi");
        assert_eq!(profile.provider, PROVIDER_EMAIL);
        assert_eq!(profile.created_at, profile.last_login);
    }
}
