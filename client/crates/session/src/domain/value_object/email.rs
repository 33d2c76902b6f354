//! Email Value Object
//!
//! Represents an email address that passed the sign-in form rules.
//! Basic validation only - the provider performs the real check.

use kernel::error::app_error::{AppError, AppResult};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Form rule: the value must contain `local@domain.tld` somewhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+")
        .expect("email pattern is a valid regex")
});

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation. The value is kept as typed.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AppError::validation("Enter a valid e-mail"));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
