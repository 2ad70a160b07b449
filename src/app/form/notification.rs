//! Transient notifications
//!
//! One visible slot: showing a notification replaces the current one. A
//! notification disappears after [`NOTIFICATION_AUTO_HIDE`] or when closed.
//! The lifecycle is independent of the request state.

use std::time::{Duration, Instant};

use crate::constants::NOTIFICATION_AUTO_HIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

/// Single-slot notification surface with auto-dismiss
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notification>,
    auto_hide: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NOTIFICATION_AUTO_HIDE)
    }
}

impl Notifier {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            current: None,
            auto_hide,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message, Instant::now());
    }

    /// Show a notification as of `now`, replacing any visible one
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!("Notification ({:?}): {}", kind, message);
        self.current = Some(Notification {
            message,
            kind,
            shown_at: now,
        });
    }

    /// Visible notification, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Explicitly close the visible notification
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Dismiss the notification if it has been visible for the auto-hide
    /// delay. Returns `true` when something was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.auto_hide);
        if expired {
            self.current = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_hide_after_delay() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.show(NotificationKind::Success, "copied", start);

        assert!(!notifier.tick(start + Duration::from_millis(2999)));
        assert!(notifier.current().is_some());

        assert!(notifier.tick(start + Duration::from_millis(3000)));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_new_notification_replaces_and_restarts_timer() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.show(NotificationKind::Success, "copied", start);
        notifier.show(
            NotificationKind::Success,
            "downloaded",
            start + Duration::from_millis(2000),
        );

        assert!(!notifier.tick(start + Duration::from_millis(4000)));
        assert_eq!(notifier.current().unwrap().message, "downloaded");
        assert!(notifier.tick(start + Duration::from_millis(5000)));
    }

    #[test]
    fn test_explicit_close() {
        let mut notifier = Notifier::default();
        notifier.error("clipboard unavailable");
        assert_eq!(notifier.current().unwrap().kind, NotificationKind::Error);

        notifier.close();
        assert!(notifier.current().is_none());
        assert!(!notifier.tick(Instant::now()));
    }
}
