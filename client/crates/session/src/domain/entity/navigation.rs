//! Navigation Types
//!
//! A navigation request is produced per attempt by the router, consumed
//! once by the auth gate, then discarded.

use std::collections::HashMap;

/// A resolved location in the route table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteLocation {
    /// Concrete path, e.g. `/interview/42`
    pub path: String,
    /// Route name, e.g. `Interview`
    pub name: Option<&'static str>,
    /// Path parameters, e.g. `id -> 42`
    pub params: HashMap<String, String>,
}

impl RouteLocation {
    pub fn new(path: impl Into<String>, name: &'static str) -> Self {
        Self {
            path: path.into(),
            name: Some(name),
            params: HashMap::new(),
        }
    }

    /// Location before the first navigation
    pub fn start() -> Self {
        Self {
            path: "/".to_string(),
            name: None,
            params: HashMap::new(),
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// One navigation attempt
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub to: RouteLocation,
    pub from: RouteLocation,
}

/// Outcome of the auth gate for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(String),
}

impl NavigationDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, NavigationDecision::Proceed)
    }
}
