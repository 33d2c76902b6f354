//! Password Value Object
//!
//! Raw password from the auth form, checked against the length policy.
//! The value is handed to the provider as-is and never logged.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Length policy in characters (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 6,
        }
    }
}

impl PasswordPolicy {
    pub fn allows(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }
}

/// Password that passed the form policy
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>, policy: &PasswordPolicy) -> AppResult<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let len = raw.chars().count();
        if !policy.allows(len) {
            return Err(AppError::validation(format!(
                "Invalid password length: expected {}-{} characters",
                policy.min_len, policy.max_len
            )));
        }

        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_bounds_inclusive() {
        let policy = PasswordPolicy::default();
        assert!(Password::new("ab", &policy).is_ok());
        assert!(Password::new("abcdef", &policy).is_ok());
        assert!(Password::new("a", &policy).is_err());
        assert!(Password::new("abcdefg", &policy).is_err());
    }

    #[test]
    fn test_empty_is_required_error() {
        let err = Password::new("", &PasswordPolicy::default()).unwrap_err();
        assert_eq!(err.message(), "Password is required");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 3 Cyrillic characters, 6 bytes
        assert!(Password::new("абв", &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn test_debug_redacts() {
        let password = Password::new("secret", &PasswordPolicy::default()).unwrap();
        assert!(!format!("{:?}", password).contains("secret"));
    }
}
