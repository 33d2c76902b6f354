//! Notifier Trait
//!
//! Fire-and-forget notification surface.

use crate::domain::entity::notification::Notification;

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
