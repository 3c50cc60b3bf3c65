//! Login form validation and the demo authentication stub.

use crate::errors::{AppError, AppResult};
use crate::models::user::UserRecord;
use regex::Regex;
use std::sync::LazyLock;

/// The only password the demo accepts.
pub const DEMO_PASSWORD: &str = "password";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

/// Inline error shown next to a login field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: LoginField,
    pub message: String,
}

impl FieldError {
    fn new(field: LoginField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check both fields and report every problem at once.
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(FieldError::new(LoginField::Email, "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            LoginField::Email,
            "Please enter a valid email address",
        ));
    }

    if password.is_empty() {
        errors.push(FieldError::new(LoginField::Password, "Password is required"));
    }

    errors
}

pub fn authenticate(users: &[UserRecord], email: &str, password: &str) -> AppResult<UserRecord> {
    let user = users
        .iter()
        .find(|u| u.email.to_lowercase() == email.to_lowercase());

    match user {
        Some(u) if password == DEMO_PASSWORD => Ok(u.clone()),
        _ => Err(AppError::Authentication(
            "Invalid email or password. Use password \"password\" for demo.".to_string(),
        )),
    }
}
