//! Logged-in View State
//!
//! Boolean projection of the session for UI components. The value is
//! re-read from the store at every lifecycle point, so sign-outs triggered
//! elsewhere show up on the next update.

use crate::application::session_store::SessionStore;
use crate::domain::entity::session::Session;

/// Pure projection used by every consumer
pub fn derive_is_logged_in(session: &Session) -> bool {
    session.present()
}

pub struct LoggedInState {
    store: SessionStore,
    is_logged_in: bool,
}

impl LoggedInState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            is_logged_in: false,
        }
    }

    /// First mount
    pub fn on_before_mount(&mut self) {
        self.refresh();
    }

    /// Every update cycle
    pub fn on_updated(&mut self) {
        self.refresh();
    }

    /// Value computed at the last lifecycle point
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    fn refresh(&mut self) {
        self.is_logged_in = derive_is_logged_in(&self.store.snapshot());
    }
}
