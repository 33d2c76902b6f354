//! Infrastructure Layer
//!
//! Provider and notifier implementations.

pub mod memory;
pub mod notifier;
