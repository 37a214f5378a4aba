//! Toast notification slot.
//!
//! DESIGN
//! ======
//! At most one notification is on screen. Showing a new one evicts whatever
//! is there, and every toast carries a fresh id so that a stale auto-dismiss
//! timer from an evicted toast cannot remove its successor.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Background color of the toast.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#54D4C8",
            Self::Error => "#FF6B6B",
            Self::Info => "#333",
        }
    }

    /// Suffix used in the `notification-{name}` class.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity.name())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    next_id: u64,
    current: Option<Notification>,
}

impl NotificationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replace the visible notification with a new one.
    pub fn show(&mut self, message: &str, severity: Severity) -> Notification {
        self.next_id += 1;
        let notification = Notification { id: NotificationId(self.next_id), message: message.to_owned(), severity };
        self.current = Some(notification.clone());
        notification
    }

    /// Remove `id` if it is still the visible notification.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
