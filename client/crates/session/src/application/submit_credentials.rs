//! Submit Credentials Use Case
//!
//! Validates the auth form, signs in or registers with the provider and
//! establishes the session.

use std::sync::Arc;

use kernel::identity::Identity;

use crate::application::config::SessionConfig;
use crate::application::loading::LoadingFlag;
use crate::application::messages;
use crate::application::session_store::SessionStore;
use crate::domain::notifier::Notifier;
use crate::domain::provider::AuthProvider;
use crate::domain::value_object::credentials::{AuthMode, Credentials};
use crate::error::{AuthError, AuthResult};

/// Submission output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEstablished {
    pub identity: Identity,
    /// Where the caller should navigate next
    pub redirect_to: String,
}

/// Submit credentials use case
pub struct SubmitCredentialsUseCase<P, N>
where
    P: AuthProvider,
    N: Notifier,
{
    provider: Arc<P>,
    notifier: Arc<N>,
    store: SessionStore,
    loading: LoadingFlag,
    config: Arc<SessionConfig>,
}

impl<P, N> SubmitCredentialsUseCase<P, N>
where
    P: AuthProvider,
    N: Notifier,
{
    pub fn new(
        provider: Arc<P>,
        notifier: Arc<N>,
        store: SessionStore,
        loading: LoadingFlag,
        config: Arc<SessionConfig>,
    ) -> Self {
        Self {
            provider,
            notifier,
            store,
            loading,
            config,
        }
    }

    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    pub async fn execute(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> AuthResult<SessionEstablished> {
        let _loading = self.loading.acquire();

        let validated = match credentials.validate(&self.config.password_policy()) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(mode = %mode, error = %err, "Auth form rejected");
                self.notifier.notify(messages::validation_failed());
                return Err(err);
            }
        };

        let ticket = self.store.begin_attempt();

        let result = match mode {
            AuthMode::SignIn => {
                self.provider
                    .sign_in(&validated.email, &validated.password)
                    .await
            }
            AuthMode::SignUp => {
                self.provider
                    .sign_up(&validated.email, &validated.password)
                    .await
            }
        };

        let identity = match result {
            Ok(identity) => identity,
            Err(err) => {
                err.log();
                if self.store.is_current(&ticket) {
                    self.notifier.notify(messages::credentials_rejected(&err));
                }
                return Err(err);
            }
        };

        if !self.store.commit(&ticket, &identity) {
            return Err(AuthError::AttemptSuperseded);
        }

        self.notifier.notify(messages::success(mode));

        tracing::info!(
            mode = %mode,
            user_id = %identity,
            "Session established"
        );

        Ok(SessionEstablished {
            identity,
            redirect_to: self.config.home_route.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::notification::NotificationKind;
    use crate::domain::provider::AuthState;
    use crate::infra::memory::InMemoryAuthProvider;
    use crate::infra::notifier::RecordingNotifier;
    use std::time::Duration;

    struct Fixture {
        provider: InMemoryAuthProvider,
        notifier: Arc<RecordingNotifier>,
        store: SessionStore,
        use_case: SubmitCredentialsUseCase<InMemoryAuthProvider, RecordingNotifier>,
    }

    fn fixture() -> Fixture {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        let notifier = Arc::new(RecordingNotifier::new());
        let store = SessionStore::new();
        let use_case = SubmitCredentialsUseCase::new(
            Arc::new(provider.clone()),
            notifier.clone(),
            store.clone(),
            LoadingFlag::new(),
            Arc::new(SessionConfig::default()),
        );
        Fixture {
            provider,
            notifier,
            store,
            use_case,
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let f = fixture();
        let creds = Credentials::new("user@test.com", "secret");

        let signed_up = f.use_case.execute(AuthMode::SignUp, &creds).await.unwrap();
        assert_eq!(f.store.user_id(), signed_up.identity.as_str());
        assert_eq!(signed_up.redirect_to, "/");

        f.store.sign_out();
        let signed_in = f.use_case.execute(AuthMode::SignIn, &creds).await.unwrap();
        assert_eq!(signed_in.identity, signed_up.identity);

        let kinds: Vec<_> = f.notifier.take().into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Success]);
    }

    #[tokio::test]
    async fn test_validation_skips_provider() {
        let f = fixture();
        let err = f
            .use_case
            .execute(AuthMode::SignIn, &Credentials::new("", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(f.provider.call_count(), 0);
        assert!(!f.use_case.loading().is_loading());
    }

    #[tokio::test]
    async fn test_unknown_account_rejected() {
        let f = fixture();
        let err = f
            .use_case
            .execute(AuthMode::SignIn, &Credentials::new("nobody@test.com", "abc"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::Provider("auth/user-not-found".to_string()));
        assert!(!f.store.is_present());
        let notes = f.notifier.take();
        assert!(notes[0].message.contains("auth/user-not-found"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_held_while_provider_pending() {
        let f = fixture();
        f.provider.set_latency(Duration::from_secs(2)).await;
        let creds = Credentials::new("user@test.com", "abc");
        let loading = f.use_case.loading().clone();

        let submit = f.use_case.execute(AuthMode::SignUp, &creds);
        let probe = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            loading.is_loading()
        };

        let (result, was_loading) = tokio::join!(submit, probe);
        assert!(result.is_ok());
        assert!(was_loading);
        assert!(!loading.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_during_submission_discards_result() {
        let f = fixture();
        f.provider.set_latency(Duration::from_secs(2)).await;
        let creds = Credentials::new("user@test.com", "abc");

        let submit = f.use_case.execute(AuthMode::SignUp, &creds);
        let sign_out = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            f.store.sign_out();
        };

        let (result, ()) = tokio::join!(submit, sign_out);
        assert_eq!(result, Err(AuthError::AttemptSuperseded));
        assert!(!f.store.is_present());
        assert!(f.notifier.take().is_empty());
    }
}
