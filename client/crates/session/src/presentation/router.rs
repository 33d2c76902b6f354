//! Client Router
//!
//! Route table plus navigation. Guarded routes run the auth gate through
//! [`guard::require_auth`](crate::presentation::guard::require_auth).

use std::collections::HashMap;

use tokio::sync::watch;

use crate::application::auth_gate::AuthGateUseCase;
use crate::application::navigation_ticket::NavigationSequencer;
use crate::domain::entity::navigation::{NavigationDecision, NavigationRequest, RouteLocation};
use crate::domain::provider::AuthProvider;
use crate::error::{AuthError, AuthResult};
use crate::presentation::guard::{self, GuardNext};

/// Route table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    /// Pattern, `:name` segments capture a parameter
    pub path: &'static str,
    pub name: &'static str,
    /// Whether the auth gate runs before entering
    pub guarded: bool,
}

pub const ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: "Home",
        guarded: true,
    },
    RouteRecord {
        path: "/auth",
        name: "Auth",
        guarded: false,
    },
    RouteRecord {
        path: "/interview/:id",
        name: "Interview",
        guarded: true,
    },
    RouteRecord {
        path: "/list",
        name: "List",
        guarded: true,
    },
    RouteRecord {
        path: "/statistic",
        name: "Statistic",
        guarded: true,
    },
];

impl RouteRecord {
    /// Match a concrete path, returning captured params
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let pattern: Vec<&str> = segments(self.path).collect();
        let actual: Vec<&str> = segments(path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (expected, got) in pattern.iter().zip(actual.iter()) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), (*got).to_string());
                }
                None if expected == got => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty())
}

/// Router over a route table
pub struct Router<P>
where
    P: AuthProvider,
{
    routes: Vec<RouteRecord>,
    gate: AuthGateUseCase<P>,
    sequencer: NavigationSequencer,
    current: watch::Sender<RouteLocation>,
}

impl<P> Router<P>
where
    P: AuthProvider,
{
    /// Router with the application route table
    pub fn new(gate: AuthGateUseCase<P>) -> Self {
        Self::with_routes(gate, ROUTES.to_vec())
    }

    pub fn with_routes(gate: AuthGateUseCase<P>, routes: Vec<RouteRecord>) -> Self {
        Self {
            routes,
            gate,
            sequencer: NavigationSequencer::new(),
            current: watch::Sender::new(RouteLocation::start()),
        }
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Look up a path in the route table
    pub fn resolve(&self, path: &str) -> AuthResult<(RouteRecord, RouteLocation)> {
        self.routes
            .iter()
            .find_map(|record| {
                record.matches(path).map(|params| {
                    let location = RouteLocation {
                        path: path.to_string(),
                        name: Some(record.name),
                        params,
                    };
                    (*record, location)
                })
            })
            .ok_or_else(|| AuthError::RouteNotFound(path.to_string()))
    }

    /// Location of the last committed navigation
    pub fn current(&self) -> RouteLocation {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RouteLocation> {
        self.current.subscribe()
    }

    /// Navigate to `path`, running the guard for protected routes
    ///
    /// Returns the location actually entered, which is the redirect target
    /// when the guard refuses. A redirect is final and is not guarded again.
    /// Leaving the auth page cancels any credential submission still in flight.
    pub async fn navigate(&self, path: &str) -> AuthResult<RouteLocation> {
        let (record, to) = self.resolve(path)?;
        let mut ticket = self.sequencer.issue();
        if record.matches(&self.gate.config().auth_route).is_none() {
            self.gate.store().cancel_attempts();
        }
        let request = NavigationRequest {
            to,
            from: self.current(),
        };

        let target = if record.guarded {
            let (next, decision) = GuardNext::channel();
            guard::require_auth(&self.gate, &request, &mut ticket, next).await;

            match decision.await {
                Ok(NavigationDecision::Proceed) => request.to,
                Ok(NavigationDecision::Redirect(redirect)) => self.resolve(&redirect)?.1,
                Err(_) => return Err(AuthError::NavigationSuperseded),
            }
        } else {
            request.to
        };

        if !ticket.is_current() {
            return Err(AuthError::NavigationSuperseded);
        }

        tracing::info!(
            requested = %path,
            path = %target.path,
            route = target.name.unwrap_or_default(),
            "Navigation committed"
        );
        self.current.send_replace(target.clone());
        Ok(target)
    }
}
