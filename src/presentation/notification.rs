//! Transient notifications.
//!
//! A [`NotificationCenter`] holds messages for [`DISPLAY_DURATION`] after they
//! are raised. Rendering is left to the caller; expired entries are dropped
//! whenever the visible set is read.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Confirmation, shown in green.
    #[default]
    Success,
    /// Failure, shown in red.
    Error,
}

impl NotificationKind {
    /// Maps a style name to a kind: `"success"` is success, anything else
    /// is an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "success" {
            Self::Success
        } else {
            Self::Error
        }
    }

    /// Returns the CSS class suffix for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Returns the background color for this kind.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#2ecc71",
            Self::Error => "#e74c3c",
        }
    }
}

/// A message raised at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The text to show.
    pub message: String,
    /// The style to show it in.
    pub kind: NotificationKind,
    /// When it was raised.
    pub created_at: Instant,
}

impl Notification {
    /// Returns the instant after which the notification is gone.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.created_at + DISPLAY_DURATION
    }

    /// Returns `true` if the notification is still visible at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}

/// Queue of currently visible notifications, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<Notification>,
}

impl NotificationCenter {
    /// Creates an empty notification center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a notification now.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> &Notification {
        self.notify_at(message, kind, Instant::now())
    }

    /// Raises a notification as of `now`.
    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> &Notification {
        let notification = Notification {
            message: message.into(),
            kind,
            created_at: now,
        };
        tracing::debug!("Notification ({}): {}", kind.as_str(), notification.message);
        self.active.push(notification);
        &self.active[self.active.len() - 1]
    }

    /// Returns the notifications visible at `now`, dropping expired ones.
    pub fn visible_at(&mut self, now: Instant) -> &[Notification] {
        self.active.retain(|notification| notification.is_visible_at(now));
        &self.active
    }

    /// Returns the notifications visible now.
    pub fn visible(&mut self) -> &[Notification] {
        self.visible_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(NotificationKind::Success.color(), "#2ecc71");
        assert_eq!(NotificationKind::Error.color(), "#e74c3c");
    }

    #[test]
    fn test_any_non_success_name_is_error() {
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Error);
    }

    #[test]
    fn test_notification_expires_after_three_seconds() {
        let start = Instant::now();
        let mut center = NotificationCenter::new();
        center.notify_at("Added to cart", NotificationKind::Success, start);

        assert_eq!(center.visible_at(start).len(), 1);
        assert_eq!(
            center.visible_at(start + Duration::from_millis(2999)).len(),
            1
        );
        assert!(center.visible_at(start + DISPLAY_DURATION).is_empty());
    }

    #[test]
    fn test_notifications_expire_independently() {
        let start = Instant::now();
        let mut center = NotificationCenter::new();
        center.notify_at("first", NotificationKind::Success, start);
        center.notify_at(
            "second",
            NotificationKind::Error,
            start + Duration::from_secs(2),
        );

        let visible = center.visible_at(start + Duration::from_secs(4));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "second");
        assert_eq!(visible[0].kind, NotificationKind::Error);
    }
}
