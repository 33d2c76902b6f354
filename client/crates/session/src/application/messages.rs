//! Notification copy for the auth flow

use crate::domain::entity::notification::Notification;
use crate::domain::value_object::credentials::AuthMode;
use crate::error::AuthError;

pub const SUCCESS_TITLE: &str = "Success";
pub const ERROR_TITLE: &str = "Error";

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration completed successfully";
pub const SIGN_IN_SUCCESS_MESSAGE: &str = "Signed in successfully";
pub const VALIDATION_FAILED_MESSAGE: &str = "Form validation failed";
pub const CREDENTIALS_REJECTED_MESSAGE: &str = "Invalid credentials";

pub fn success(mode: AuthMode) -> Notification {
    let message = match mode {
        AuthMode::SignIn => SIGN_IN_SUCCESS_MESSAGE,
        AuthMode::SignUp => REGISTRATION_SUCCESS_MESSAGE,
    };
    Notification::success(SUCCESS_TITLE, message)
}

pub fn validation_failed() -> Notification {
    Notification::error(ERROR_TITLE, VALIDATION_FAILED_MESSAGE)
}

/// Provider rejection; the provider's detail is kept verbatim
pub fn credentials_rejected(err: &AuthError) -> Notification {
    let message = match err.detail() {
        Some(_) => err.to_app_error().user_message(),
        None => format!("{CREDENTIALS_REJECTED_MESSAGE} - {err}"),
    };
    Notification::error(ERROR_TITLE, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::notification::NotificationKind;

    #[test]
    fn test_success_copy_per_mode() {
        assert_eq!(success(AuthMode::SignUp).message, REGISTRATION_SUCCESS_MESSAGE);
        assert_eq!(success(AuthMode::SignIn).message, SIGN_IN_SUCCESS_MESSAGE);
        assert_eq!(success(AuthMode::SignIn).kind, NotificationKind::Success);
    }

    #[test]
    fn test_rejection_contains_detail() {
        let n = credentials_rejected(&AuthError::Provider("auth/wrong-password".into()));
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Invalid credentials - auth/wrong-password");
    }
}
