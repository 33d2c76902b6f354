//! Provider settings from the environment

use std::env;

/// Managed auth provider project settings
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
}

impl ProviderSettings {
    /// Read `TRACKER_AUTH_API_KEY`, `TRACKER_AUTH_DOMAIN`, `TRACKER_PROJECT_ID`
    pub fn from_env() -> Self {
        let var = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: var("TRACKER_AUTH_API_KEY"),
            auth_domain: var("TRACKER_AUTH_DOMAIN"),
            project_id: var("TRACKER_PROJECT_ID"),
        }
    }

    /// No project configured: run against the in-memory provider
    pub fn is_local(&self) -> bool {
        self.api_key.is_none() || self.project_id.is_none()
    }
}

/// Credentials used by the scripted session
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl DemoAccount {
    pub fn from_env() -> Self {
        Self {
            email: env::var("TRACKER_DEMO_EMAIL").unwrap_or_else(|_| "demo@tracker.dev".to_string()),
            password: env::var("TRACKER_DEMO_PASSWORD").unwrap_or_else(|_| "demo1".to_string()),
        }
    }
}
