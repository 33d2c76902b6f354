//! Notification Entity
//!
//! User-visible toast raised by the use cases.

use derive_more::Display;
use serde::Serialize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[display("success")]
    Success,
    #[display("warning")]
    Warning,
    #[display("info")]
    Info,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(NotificationKind::Success.to_string(), "success");
        assert_eq!(NotificationKind::Error.to_string(), "error");
    }

    #[test]
    fn test_serialize() {
        let n = Notification::error("Error", "Form validation failed");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["title"], "Error");
    }
}
