//! Auth Provider Trait
//!
//! Interface to the external managed auth service. Implementation is in
//! the infrastructure layer.

use kernel::identity::Identity;
use tokio::sync::watch;

use crate::domain::value_object::{email::Email, password::Password};
use crate::error::AuthResult;

/// Provider's view of who is signed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The provider has not reported anything yet
    Pending,
    SignedIn(Identity),
    SignedOut,
    /// The provider could not determine the state (e.g. network failure)
    Failed(String),
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Pending)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Auth provider trait
#[trait_variant::make(AuthProvider: Send)]
pub trait LocalAuthProvider {
    /// Sign in with existing credentials
    async fn sign_in(&self, email: &Email, password: &Password) -> AuthResult<Identity>;

    /// Register a new account and sign it in
    async fn sign_up(&self, email: &Email, password: &Password) -> AuthResult<Identity>;

    /// End the provider-side session
    async fn sign_out(&self) -> AuthResult<()>;

    /// Subscribe to auth-state changes
    ///
    /// Every call returns a fresh receiver positioned at the latest value.
    fn auth_state(&self) -> watch::Receiver<AuthState>;
}
