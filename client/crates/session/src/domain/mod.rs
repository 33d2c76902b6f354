//! Domain Layer
//!
//! Contains entities, value objects, and the provider / notifier traits.

pub mod entity;
pub mod notifier;
pub mod provider;
pub mod value_object;

// Re-exports
pub use entity::{
    navigation::{NavigationDecision, NavigationRequest, RouteLocation},
    notification::{Notification, NotificationKind},
    session::Session,
};
pub use notifier::Notifier;
pub use provider::{AuthProvider, AuthState};
