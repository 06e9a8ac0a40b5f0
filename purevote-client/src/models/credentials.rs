//! Raw sign-up form values, validated before any provider call.

/// Sign-up form fields as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl SignupForm {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        agree_terms: bool,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
            agree_terms,
        }
    }
}
