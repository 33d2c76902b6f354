//! Sign Out Use Case
//!
//! Clears the local session and ends the provider session.

use std::sync::Arc;

use crate::application::session_store::SessionStore;
use crate::domain::provider::AuthProvider;

/// Sign out use case
pub struct SignOutUseCase<P>
where
    P: AuthProvider,
{
    provider: Arc<P>,
    store: SessionStore,
}

impl<P> SignOutUseCase<P>
where
    P: AuthProvider,
{
    pub fn new(provider: Arc<P>, store: SessionStore) -> Self {
        Self { provider, store }
    }

    /// Always clears the store; a provider failure is only logged
    pub async fn execute(&self) {
        let user_id = self.store.user_id();
        self.store.sign_out();

        if let Err(e) = self.provider.sign_out().await {
            tracing::warn!(error = %e, "Provider sign-out failed, local session cleared anyway");
        }

        tracing::info!(user_id = %user_id, "User signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::{AuthProvider, AuthState};
    use crate::infra::memory::InMemoryAuthProvider;
    use kernel::identity::Identity;

    #[tokio::test]
    async fn test_clears_store_and_provider() {
        let id = Identity::new("u1").unwrap();
        let provider = InMemoryAuthProvider::new(AuthState::SignedIn(id.clone()));
        let store = SessionStore::new();
        store.set_user_id(&id);

        SignOutUseCase::new(Arc::new(provider.clone()), store.clone())
            .execute()
            .await;

        assert!(!store.is_present());
        assert_eq!(*provider.auth_state().borrow(), AuthState::SignedOut);
    }

    #[tokio::test]
    async fn test_provider_failure_still_clears() {
        let id = Identity::new("u1").unwrap();
        let provider = InMemoryAuthProvider::new(AuthState::SignedIn(id.clone()));
        provider.fail_with("auth/network-request-failed").await;
        let store = SessionStore::new();
        store.set_user_id(&id);

        let use_case = SignOutUseCase::new(Arc::new(provider), store.clone());
        use_case.execute().await;
        use_case.execute().await;

        assert_eq!(store.user_id(), "");
    }
}
