//! Local credential checks. Pure and synchronous; nothing here talks to
//! the identity provider.

use crate::models::SignupForm;
use thiserror::Error;

/// Why a form was rejected before any provider call. `Display` is the
/// user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your first and last name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a password")]
    MissingPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password should be at least 8 characters long")]
    PasswordTooShort,

    #[error("You must agree to the Terms of Service and Privacy Policy")]
    TermsNotAccepted,

    #[error("Please enter both email and password")]
    MissingCredentials,
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a sign-up form. Checks run in order; the first failure wins.
///
/// Email format is left to the identity provider.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.first_name.is_empty() || form.last_name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !form.agree_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

/// Both fields are required before a sign-in attempt.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// An address is required before requesting a reset email.
pub fn validate_reset(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    Ok(())
}

/// Password strength tier, derived from the 0-5 rule score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::None => "",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        }
    }
}

/// Count satisfied strength rules: length >= 8, a digit, a lowercase
/// letter, an uppercase letter, a non-alphanumeric character.
pub fn strength_score(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 1;
    }
    score
}

/// Map a password to its strength tier. Recomputed on every keystroke, so
/// this must stay allocation-free and synchronous.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::None;
    }
    match strength_score(password) {
        0 => PasswordStrength::None,
        1 | 2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        4 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}
