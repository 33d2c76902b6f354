//! Application Layer
//!
//! Use cases and application services.

pub mod auth_form;
pub mod auth_gate;
pub mod config;
pub mod loading;
pub mod logged_in;
pub mod messages;
pub mod navigation_ticket;
pub mod session_store;
pub mod sign_out;
pub mod submit_credentials;

// Re-exports
pub use auth_form::AuthForm;
pub use auth_gate::AuthGateUseCase;
pub use config::SessionConfig;
pub use loading::{LoadingFlag, LoadingGuard};
pub use logged_in::{LoggedInState, derive_is_logged_in};
pub use navigation_ticket::{NavigationSequencer, NavigationTicket};
pub use session_store::{AttemptTicket, SessionStore};
pub use sign_out::SignOutUseCase;
pub use submit_credentials::{SessionEstablished, SubmitCredentialsUseCase};
