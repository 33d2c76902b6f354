//! Auth Form State
//!
//! Sign-in / sign-up toggle and the mode-dependent form copy.

use crate::domain::value_object::credentials::{AuthMode, Credentials};

#[derive(Debug, Clone)]
pub struct AuthForm {
    is_login: bool,
    pub model: Credentials,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            is_login: true,
            model: Credentials::default(),
        }
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_login(&self) -> bool {
        self.is_login
    }

    pub fn mode(&self) -> AuthMode {
        if self.is_login {
            AuthMode::SignIn
        } else {
            AuthMode::SignUp
        }
    }

    pub fn toggle_mode(&mut self) {
        self.is_login = !self.is_login;
    }

    /// Clear the fields, keep the mode
    pub fn reset(&mut self) {
        self.model = Credentials::default();
    }

    pub fn subtitle_text(&self) -> &'static str {
        if self.is_login {
            "No account yet?"
        } else {
            "Already have an account?"
        }
    }

    pub fn link_account_text(&self) -> &'static str {
        if self.is_login {
            "Create one now"
        } else {
            "Sign in to it"
        }
    }

    pub fn submit_button_text(&self) -> &'static str {
        if self.is_login { "Sign in" } else { "Sign up" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_login_mode() {
        let form = AuthForm::new();
        assert!(form.is_login());
        assert_eq!(form.mode(), AuthMode::SignIn);
        assert_eq!(form.submit_button_text(), "Sign in");
    }

    #[test]
    fn test_toggle_switches_copy() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::SignUp);
        assert_eq!(form.subtitle_text(), "Already have an account?");
        assert_eq!(form.link_account_text(), "Sign in to it");
        assert_eq!(form.submit_button_text(), "Sign up");
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        form.model = Credentials::new("user@test.com", "abc");
        form.reset();
        assert_eq!(form.model, Credentials::default());
        assert!(!form.is_login());
    }
}
