//! Auth Gate Use Case
//!
//! Decides whether a navigation to a protected route may proceed.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::application::navigation_ticket::NavigationTicket;
use crate::application::session_store::SessionStore;
use crate::domain::entity::navigation::{NavigationDecision, NavigationRequest};
use crate::domain::provider::{AuthProvider, AuthState};
use crate::error::{AuthError, AuthResult};

/// Auth gate use case
pub struct AuthGateUseCase<P>
where
    P: AuthProvider,
{
    provider: Arc<P>,
    store: SessionStore,
    config: Arc<SessionConfig>,
}

impl<P> AuthGateUseCase<P>
where
    P: AuthProvider,
{
    pub fn new(provider: Arc<P>, store: SessionStore, config: Arc<SessionConfig>) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Decide one navigation attempt
    ///
    /// Waits for the provider to resolve its auth state, at most
    /// `resolution_timeout`. Returns exactly one decision, or
    /// `NavigationSuperseded` if `ticket` is replaced first.
    pub async fn execute(
        &self,
        request: &NavigationRequest,
        ticket: &mut NavigationTicket,
    ) -> AuthResult<NavigationDecision> {
        // Fresh subscription per attempt; never reuse a previous resolution.
        let mut auth_state = self.provider.auth_state();
        let generation = ticket.generation();

        let resolution = async {
            auth_state
                .wait_for(AuthState::is_resolved)
                .await
                .map(|state| state.clone())
        };

        let outcome = tokio::select! {
            biased;
            _ = ticket.superseded() => {
                tracing::debug!(
                    to = %request.to.path,
                    generation,
                    "Navigation superseded before auth state resolved"
                );
                return Err(AuthError::NavigationSuperseded);
            }
            outcome = tokio::time::timeout(self.config.resolution_timeout, resolution) => outcome,
        };

        let decision = match outcome {
            Ok(Ok(AuthState::SignedIn(identity))) => {
                tracing::debug!(
                    to = %request.to.path,
                    user_id = %identity,
                    local_session = self.store.is_present(),
                    "Navigation allowed"
                );
                NavigationDecision::Proceed
            }
            Ok(Ok(AuthState::Failed(detail))) => {
                AuthError::Provider(detail).log();
                self.redirect(request)
            }
            Ok(Ok(_)) => self.redirect(request),
            Ok(Err(_)) => {
                AuthError::Internal("auth state channel closed".to_string()).log();
                self.redirect(request)
            }
            Err(_) => {
                AuthError::ResolutionTimeout.log();
                self.redirect(request)
            }
        };

        Ok(decision)
    }

    fn redirect(&self, request: &NavigationRequest) -> NavigationDecision {
        tracing::info!(
            to = %request.to.path,
            from = %request.from.path,
            redirect = %self.config.landing_route,
            local_session = self.store.is_present(),
            "Navigation redirected: not authenticated"
        );
        NavigationDecision::Redirect(self.config.landing_route.clone())
    }
}
