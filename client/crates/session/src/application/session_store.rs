//! Session Store
//!
//! Single source of truth for who is signed in. The store is a cheap
//! `Clone` handle; inject it wherever the session is read or written.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kernel::identity::Identity;
use tokio::sync::watch;

use crate::domain::entity::session::Session;

/// Handle to one credential submission
///
/// Only the most recently issued ticket may write the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTicket {
    generation: u64,
}

struct StoreInner {
    session: watch::Sender<Session>,
    attempt: AtomicU64,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                session: watch::Sender::new(Session::anonymous()),
                attempt: AtomicU64::new(0),
            }),
        }
    }

    /// Current identity or `""`
    pub fn user_id(&self) -> String {
        self.inner.session.borrow().user_id().to_string()
    }

    pub fn is_present(&self) -> bool {
        self.inner.session.borrow().present()
    }

    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    /// Observe session changes
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.session.subscribe()
    }

    /// Set the identity unconditionally. Callers pass a provider-issued identity.
    pub fn set_user_id(&self, identity: &Identity) {
        self.inner.session.send_replace(Session::signed_in(identity));
        tracing::debug!(user_id = %identity, "Session identity set");
    }

    /// Clear the identity. Idempotent.
    ///
    /// Also supersedes any outstanding attempt ticket, so a submission that
    /// resolves after a sign-out cannot sign the user back in.
    pub fn sign_out(&self) {
        self.cancel_attempts();
        let cleared = self.inner.session.send_if_modified(|session| {
            if session.present() {
                *session = Session::anonymous();
                true
            } else {
                false
            }
        });
        if cleared {
            tracing::debug!("Session identity cleared");
        }
    }

    /// Supersede every outstanding attempt ticket without touching the session
    pub fn cancel_attempts(&self) {
        let generation = self.inner.attempt.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(generation, "Outstanding attempts cancelled");
    }

    /// Start a new credential attempt, superseding earlier ones
    pub fn begin_attempt(&self) -> AttemptTicket {
        let generation = self.inner.attempt.fetch_add(1, Ordering::SeqCst) + 1;
        AttemptTicket { generation }
    }

    pub fn is_current(&self, ticket: &AttemptTicket) -> bool {
        self.inner.attempt.load(Ordering::SeqCst) == ticket.generation
    }

    /// Write the identity if `ticket` is still the latest attempt
    ///
    /// Returns `false` (store untouched) for a superseded ticket.
    pub fn commit(&self, ticket: &AttemptTicket, identity: &Identity) -> bool {
        let committed = self.inner.session.send_if_modified(|session| {
            if self.inner.attempt.load(Ordering::SeqCst) != ticket.generation {
                return false;
            }
            *session = Session::signed_in(identity);
            true
        });

        if committed {
            tracing::debug!(user_id = %identity, "Session identity committed");
        } else {
            tracing::debug!(
                user_id = %identity,
                generation = ticket.generation,
                "Discarded identity from superseded attempt"
            );
        }
        committed
    }
}
