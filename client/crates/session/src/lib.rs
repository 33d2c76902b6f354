//! Session (Authentication & Access Control) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, navigation types, provider and notifier traits
//! - `application/` - Session store, auth gate and credential use cases
//! - `infra/` - In-memory auth provider and notifier implementations
//! - `presentation/` - Route table, guard hook, auth page, nav menu, DTOs
//!
//! ## Features
//! - Single injectable session store holding the current identity
//! - Auth gate that waits for the provider's auth state, bounded by a timeout
//! - Superseded navigations and credential attempts are discarded
//! - `is_logged_in` view state recomputed on every lifecycle point
//!
//! ## Access Model
//! - `/auth` is public, every other route requires a resolved identity
//! - Unresolved, failed, timed out and signed-out states redirect to `/`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::session_store::SessionStore;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAuthProvider;
pub use presentation::router::Router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::identity::Identity;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
