//! Session Entity
//!
//! In-memory record of the current identity. Never persisted by the client;
//! the auth provider owns any persistence.

use kernel::identity::Identity;

/// Current session
///
/// `present()` is derived from `user_id`, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

impl Session {
    /// Empty session (nobody signed in)
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for an authenticated identity
    pub fn signed_in(identity: &Identity) -> Self {
        Self {
            user_id: identity.as_str().to_string(),
        }
    }

    /// Current identity, or `""` when signed out
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn present(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Identity as a typed value, if present
    pub fn identity(&self) -> Option<Identity> {
        Identity::new(self.user_id.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_not_present() {
        let session = Session::anonymous();
        assert_eq!(session.user_id(), "");
        assert!(!session.present());
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_signed_in_is_present() {
        let identity = Identity::new("u123").unwrap();
        let session = Session::signed_in(&identity);
        assert_eq!(session.user_id(), "u123");
        assert!(session.present());
        assert_eq!(session.identity(), Some(identity));
    }
}
