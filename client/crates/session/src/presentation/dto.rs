//! DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::session_store::SessionStore;
use crate::domain::entity::navigation::RouteLocation;
use crate::domain::value_object::credentials::Credentials;

// ============================================================================
// Auth form
// ============================================================================

/// Auth form payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<CredentialsForm> for Credentials {
    fn from(form: CredentialsForm) -> Self {
        Credentials::new(form.email, form.password)
    }
}

// ============================================================================
// Session status
// ============================================================================

/// Session status snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub logged_in: bool,
    pub user_id: Option<String>,
    pub current_route: String,
}

impl SessionStatusResponse {
    pub fn capture(store: &SessionStore, current: &RouteLocation) -> Self {
        let session = store.snapshot();
        Self {
            logged_in: session.present(),
            user_id: session.present().then(|| session.user_id().to_string()),
            current_route: current.path.clone(),
        }
    }
}
