//! Application Configuration
//!
//! Configuration for the session application layer.

use std::env;
use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::value_object::password::PasswordPolicy;

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long the auth gate waits for the provider to resolve
    pub resolution_timeout: Duration,
    /// Minimum password length (characters)
    pub password_min_len: usize,
    /// Maximum password length (characters)
    pub password_max_len: usize,
    /// Where unauthenticated navigations are sent
    pub landing_route: String,
    /// Where a successful sign-in / sign-up navigates
    pub home_route: String,
    /// Public auth page
    pub auth_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution_timeout: Duration::from_secs(5),
            password_min_len: 2,
            password_max_len: 6,
            landing_route: "/".to_string(),
            home_route: "/".to_string(),
            auth_route: "/auth".to_string(),
        }
    }
}

impl SessionConfig {
    /// Create config for development (slow local emulators)
    pub fn development() -> Self {
        Self {
            resolution_timeout: Duration::from_secs(30),
            ..Default::default()
        }
    }

    /// Overlay `TRACKER_*` environment variables on the defaults
    ///
    /// - `TRACKER_RESOLUTION_TIMEOUT_MS`
    /// - `TRACKER_PASSWORD_MIN_LEN`
    /// - `TRACKER_PASSWORD_MAX_LEN`
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(ms) = env::var("TRACKER_RESOLUTION_TIMEOUT_MS") {
            config.resolution_timeout = Duration::from_millis(ms.trim().parse()?);
        }
        if let Ok(len) = env::var("TRACKER_PASSWORD_MIN_LEN") {
            config.password_min_len = len.trim().parse()?;
        }
        if let Ok(len) = env::var("TRACKER_PASSWORD_MAX_LEN") {
            config.password_max_len = len.trim().parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject a password length range that no password can satisfy
    pub fn validate(&self) -> AppResult<()> {
        if self.password_min_len == 0 || self.password_min_len > self.password_max_len {
            return Err(AppError::validation("Invalid password length policy").with_detail(
                format!(
                    "min {} / max {}",
                    self.password_min_len, self.password_max_len
                ),
            ));
        }
        Ok(())
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_len: self.password_min_len,
            max_len: self.password_max_len,
        }
    }

    /// Get resolution timeout in milliseconds
    pub fn resolution_timeout_ms(&self) -> u64 {
        u64::try_from(self.resolution_timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_rules() {
        let config = SessionConfig::default();
        assert_eq!(config.password_policy(), PasswordPolicy::default());
        assert_eq!(config.landing_route, "/");
        assert_eq!(config.auth_route, "/auth");
        assert_eq!(config.resolution_timeout_ms(), 5000);
    }

    #[test]
    fn test_rejects_unsatisfiable_password_range() {
        let inverted = SessionConfig {
            password_min_len: 8,
            password_max_len: 4,
            ..Default::default()
        };
        let err = inverted.validate().unwrap_err();
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::Validation);
        assert_eq!(err.detail(), Some("min 8 / max 4"));

        let zero = SessionConfig {
            password_min_len: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_timeout_ms_saturates() {
        let config = SessionConfig {
            resolution_timeout: Duration::MAX,
            ..Default::default()
        };
        assert_eq!(config.resolution_timeout_ms(), u64::MAX);
    }

    #[test]
    fn test_development_keeps_routes() {
        let config = SessionConfig::development();
        assert!(config.resolution_timeout > SessionConfig::default().resolution_timeout);
        assert_eq!(config.home_route, "/");
    }
}
