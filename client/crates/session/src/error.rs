//! Session Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Session-specific error variants
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Client-side form validation failed (before any provider call)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Provider rejected the request or could not be reached
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider never resolved the auth state
    #[error("Auth state was not resolved in time")]
    ResolutionTimeout,

    /// A newer navigation started before this one was decided
    #[error("Navigation superseded by a newer attempt")]
    NavigationSuperseded,

    /// A newer submission or a sign-out replaced this attempt
    #[error("Credential submission superseded")]
    AttemptSuperseded,

    /// No route matches the requested path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::Validation,
            AuthError::Provider(_) => ErrorKind::Unauthorized,
            AuthError::ResolutionTimeout => ErrorKind::Timeout,
            AuthError::NavigationSuperseded | AuthError::AttemptSuperseded => {
                ErrorKind::Superseded
            }
            AuthError::RouteNotFound(_) => ErrorKind::NotFound,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Provider detail, if the provider supplied one
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::Provider(detail) => Some(detail),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(msg) => AppError::validation(msg.clone()),
            AuthError::Provider(detail) => {
                AppError::unauthorized("Invalid credentials").with_detail(detail.clone())
            }
            AuthError::ResolutionTimeout => AppError::timeout(self.to_string()),
            AuthError::NavigationSuperseded | AuthError::AttemptSuperseded => {
                AppError::superseded(self.to_string())
            }
            AuthError::RouteNotFound(path) => {
                AppError::not_found("Route not found").with_detail(path.clone())
            }
            AuthError::Internal(msg) => AppError::internal(msg.clone()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        if self.kind().is_internal() {
            tracing::error!(message = %self, "Session internal error");
            return;
        }
        match self {
            AuthError::Provider(detail) => {
                tracing::warn!(detail = %detail, "Auth provider rejected request");
            }
            AuthError::ResolutionTimeout => {
                tracing::warn!("Auth state resolution timed out");
            }
            _ => {
                tracing::debug!(error = %self, "Session error");
            }
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
