//! Credentials
//!
//! Raw form input and its validated counterpart.

use derive_more::Display;

use crate::domain::value_object::{
    email::Email,
    password::{Password, PasswordPolicy},
};
use crate::error::{AuthError, AuthResult};

/// Which provider call a submission makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AuthMode {
    #[display("sign_in")]
    SignIn,
    #[display("sign_up")]
    SignUp,
}

/// Email/password exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run every field rule and report all failing fields at once
    pub fn validate(&self, policy: &PasswordPolicy) -> AuthResult<ValidatedCredentials> {
        let email = Email::new(self.email.as_str());
        let password = Password::new(self.password.as_str(), policy);

        match (email, password) {
            (Ok(email), Ok(password)) => Ok(ValidatedCredentials { email, password }),
            (email, password) => {
                let failures: Vec<String> = [email.err(), password.err()]
                    .into_iter()
                    .flatten()
                    .map(|e| e.message().to_string())
                    .collect();
                Err(AuthError::Validation(failures.join("; ")))
            }
        }
    }
}

/// Credentials that passed client-side validation
#[derive(Debug, Clone)]
pub struct ValidatedCredentials {
    pub email: Email,
    pub password: Password,
}
