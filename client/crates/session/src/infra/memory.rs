//! In-memory Auth Provider
//!
//! Stand-in for the managed auth service. Accounts live in a map keyed by
//! email; error details use the provider's `auth/...` codes.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kernel::identity::Identity;
use tokio::sync::{Mutex, watch};

use crate::domain::provider::{AuthProvider, AuthState};
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

struct Account {
    identity: Identity,
    password: String,
}

#[derive(Default)]
struct Behavior {
    /// Delay applied to every call
    latency: Duration,
    /// When set, every call fails with this detail
    failure: Option<String>,
    /// Identity handed to the next sign-up
    next_identity: Option<Identity>,
}

struct Inner {
    accounts: Mutex<HashMap<String, Account>>,
    behavior: Mutex<Behavior>,
    state: watch::Sender<AuthState>,
    calls: AtomicUsize,
}

/// In-memory auth provider
#[derive(Clone)]
pub struct InMemoryAuthProvider {
    inner: Arc<Inner>,
}

impl InMemoryAuthProvider {
    pub fn new(initial: AuthState) -> Self {
        Self {
            inner: Arc::new(Inner {
                accounts: Mutex::new(HashMap::new()),
                behavior: Mutex::new(Behavior::default()),
                state: watch::Sender::new(initial),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Publish an auth-state change to every subscriber
    pub fn publish(&self, state: AuthState) {
        tracing::debug!(state = ?state, "Auth state changed");
        self.inner.state.send_replace(state);
    }

    /// Seed an existing account
    pub async fn insert_account(&self, email: &str, password: &str, identity: Identity) {
        self.inner.accounts.lock().await.insert(
            email.to_string(),
            Account {
                identity,
                password: password.to_string(),
            },
        );
    }

    pub async fn set_latency(&self, latency: Duration) {
        self.inner.behavior.lock().await.latency = latency;
    }

    /// Make every following call fail with `detail`
    pub async fn fail_with(&self, detail: impl Into<String>) {
        self.inner.behavior.lock().await.failure = Some(detail.into());
    }

    pub async fn clear_failure(&self) {
        self.inner.behavior.lock().await.failure = None;
    }

    pub async fn set_next_identity(&self, identity: Identity) {
        self.inner.behavior.lock().await.next_identity = Some(identity);
    }

    /// Number of sign-in / sign-up / sign-out calls received
    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Common preamble: count, delay, injected failure
    async fn begin_call(&self) -> AuthResult<()> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let (latency, failure) = {
            let behavior = self.inner.behavior.lock().await;
            (behavior.latency, behavior.failure.clone())
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match failure {
            Some(detail) => Err(AuthError::Provider(detail)),
            None => Ok(()),
        }
    }
}

impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(&self, email: &Email, password: &Password) -> AuthResult<Identity> {
        self.begin_call().await?;

        let identity = {
            let accounts = self.inner.accounts.lock().await;
            let account = accounts
                .get(email.as_str())
                .ok_or_else(|| AuthError::Provider("auth/user-not-found".to_string()))?;
            if account.password != password.expose() {
                return Err(AuthError::Provider("auth/wrong-password".to_string()));
            }
            account.identity.clone()
        };

        self.publish(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(&self, email: &Email, password: &Password) -> AuthResult<Identity> {
        self.begin_call().await?;

        let next_identity = self.inner.behavior.lock().await.next_identity.take();

        let identity = {
            let mut accounts = self.inner.accounts.lock().await;
            if accounts.contains_key(email.as_str()) {
                return Err(AuthError::Provider("auth/email-already-in-use".to_string()));
            }
            let identity = next_identity.unwrap_or_else(Identity::generate);
            accounts.insert(
                email.as_str().to_string(),
                Account {
                    identity: identity.clone(),
                    password: password.expose().to_string(),
                },
            );
            identity
        };

        self.publish(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.begin_call().await?;
        self.publish(AuthState::SignedOut);
        Ok(())
    }

    fn auth_state(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::password::PasswordPolicy;

    fn email(value: &str) -> Email {
        Email::new(value).unwrap()
    }

    fn password(value: &str) -> Password {
        Password::new(value, &PasswordPolicy::default()).unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_seeded_account() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        let id = Identity::new("u1").unwrap();
        provider.insert_account("user@test.com", "abc", id.clone()).await;

        let signed_in = provider
            .sign_in(&email("user@test.com"), &password("abc"))
            .await
            .unwrap();
        assert_eq!(signed_in, id);
        assert_eq!(*provider.auth_state().borrow(), AuthState::SignedIn(id));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        provider
            .insert_account("user@test.com", "abc", Identity::new("u1").unwrap())
            .await;

        let err = provider
            .sign_in(&email("user@test.com"), &password("xyz"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::Provider("auth/wrong-password".to_string()));
        assert_eq!(*provider.auth_state().borrow(), AuthState::SignedOut);
    }

    #[tokio::test]
    async fn test_duplicate_sign_up() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        provider
            .sign_up(&email("user@test.com"), &password("abc"))
            .await
            .unwrap();
        let err = provider
            .sign_up(&email("user@test.com"), &password("abc"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::Provider("auth/email-already-in-use".to_string()));
    }

    #[tokio::test]
    async fn test_next_identity_used_once() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        provider.set_next_identity(Identity::new("u123").unwrap()).await;

        let first = provider.sign_up(&email("a@test.com"), &password("abc")).await.unwrap();
        let second = provider.sign_up(&email("b@test.com"), &password("abc")).await.unwrap();
        assert_eq!(first.as_str(), "u123");
        assert_ne!(second.as_str(), "u123");
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        provider.fail_with("auth/network-request-failed").await;
        assert!(provider.sign_out().await.is_err());

        provider.clear_failure().await;
        assert!(provider.sign_out().await.is_ok());
        assert_eq!(provider.call_count(), 2);
    }
}
