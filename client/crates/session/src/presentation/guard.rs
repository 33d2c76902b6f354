//! Auth Guard
//!
//! Guard hook for protected routes, invoked as `(to, from, next)`.

use tokio::sync::oneshot;

use crate::application::auth_gate::AuthGateUseCase;
use crate::application::navigation_ticket::NavigationTicket;
use crate::domain::entity::navigation::{NavigationDecision, NavigationRequest};
use crate::domain::provider::AuthProvider;

/// Continuation handed to a guard
///
/// Both methods consume `self`, so a guard can decide at most once.
/// Dropping it without deciding discards the navigation.
pub struct GuardNext {
    tx: oneshot::Sender<NavigationDecision>,
}

impl GuardNext {
    pub fn channel() -> (Self, oneshot::Receiver<NavigationDecision>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn proceed(self) {
        let _ = self.tx.send(NavigationDecision::Proceed);
    }

    pub fn redirect(self, path: impl Into<String>) {
        let _ = self.tx.send(NavigationDecision::Redirect(path.into()));
    }
}

/// Guard that requires a resolved, authenticated identity
pub async fn require_auth<P>(
    gate: &AuthGateUseCase<P>,
    request: &NavigationRequest,
    ticket: &mut NavigationTicket,
    next: GuardNext,
) where
    P: AuthProvider,
{
    match gate.execute(request, ticket).await {
        Ok(NavigationDecision::Proceed) => next.proceed(),
        Ok(NavigationDecision::Redirect(path)) => next.redirect(path),
        Err(e) => e.log(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::SessionConfig;
    use crate::application::navigation_ticket::NavigationSequencer;
    use crate::application::session_store::SessionStore;
    use crate::domain::entity::navigation::RouteLocation;
    use crate::domain::provider::AuthState;
    use crate::infra::memory::InMemoryAuthProvider;
    use std::sync::Arc;

    fn request() -> NavigationRequest {
        NavigationRequest {
            to: RouteLocation::new("/list", "List"),
            from: RouteLocation::start(),
        }
    }

    #[tokio::test]
    async fn test_next_delivers_single_decision() {
        let (next, rx) = GuardNext::channel();
        next.redirect("/");
        assert_eq!(rx.await.unwrap(), NavigationDecision::Redirect("/".to_string()));
    }

    #[tokio::test]
    async fn test_dropped_next_reports_no_decision() {
        let (next, rx) = GuardNext::channel();
        drop(next);
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_require_auth_redirects_signed_out() {
        let provider = InMemoryAuthProvider::new(AuthState::SignedOut);
        let gate = AuthGateUseCase::new(
            Arc::new(provider),
            SessionStore::new(),
            Arc::new(SessionConfig::default()),
        );
        let sequencer = NavigationSequencer::new();
        let mut ticket = sequencer.issue();
        let (next, rx) = GuardNext::channel();

        require_auth(&gate, &request(), &mut ticket, next).await;
        assert_eq!(rx.await.unwrap(), NavigationDecision::Redirect("/".to_string()));
    }
}
