//! Shared Kernel - vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error kind and the unified [`error::app_error::AppError`]
//! - The opaque provider-issued [`identity::Identity`]
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all client features.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod identity;
