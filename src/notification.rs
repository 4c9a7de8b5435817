use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Info => "ℹ️",
        };
        write!(f, "{}", label)
    }
}

/// A transient, dismissible message shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.message)
    }
}

/// Holds the single notification currently on screen. A new one replaces it.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification {
            message: message.into(),
            kind,
        };
        tracing::debug!(kind = ?notification.kind, "{}", notification.message);
        self.current = Some(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Close the notification, returning what was shown.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }
}
