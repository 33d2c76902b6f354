//! Notifier Implementations

use std::sync::{Mutex, PoisonError};

use crate::domain::entity::notification::{Notification, NotificationKind};
use crate::domain::notifier::Notifier;

/// Writes notifications to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: Notification) {
        match n.kind {
            NotificationKind::Error => {
                tracing::error!(title = %n.title, body = %n.message, "Notification")
            }
            NotificationKind::Warning => {
                tracing::warn!(title = %n.title, body = %n.message, "Notification")
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = %n.kind, title = %n.title, body = %n.message, "Notification")
            }
        }
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        let mut guard = self
            .notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    pub fn len(&self) -> usize {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
