pub mod validation;

pub use validation::{
    password_strength, validate_login, validate_reset, validate_signup, PasswordStrength,
    ValidationError,
};
