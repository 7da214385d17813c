//! Toast notifications
//!
//! Transient messages shown in the corner of the screen. The center keeps the
//! active toasts and drops them once they expire.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// What gets shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// A notification with its display timing
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: DateTime<Local>,
    created: Instant,
}

impl Toast {
    pub fn formatted_time(&self) -> String {
        self.shown_at.format("%H:%M:%S").to_string()
    }
}

/// Active toasts, oldest first
#[derive(Debug)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        info!(
            title = %notification.title,
            description = %notification.description,
            destructive = notification.is_destructive(),
            "Notification"
        );
        self.toasts.push(Toast {
            notification,
            shown_at: Local::now(),
            created: Instant::now(),
        });
    }

    /// Drop expired toasts, returns true if anything was removed
    pub fn prune(&mut self) -> bool {
        self.prune_at(Instant::now())
    }

    fn prune_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created) < lifetime);
        self.toasts.len() != before
    }

    /// Dismiss the newest toast
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.toasts.pop().map(|toast| toast.notification)
    }

    /// Active toasts, newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
impl NotificationCenter {
    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.last().map(|toast| &toast.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_variant() {
        let n = Notification::destructive("Error", "boom");
        assert!(n.is_destructive());
        assert!(!Notification::new("Success!", "ok").is_destructive());
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut center = NotificationCenter::default();
        center.push(Notification::new("first", ""));
        center.push(Notification::new("second", ""));

        let titles: Vec<_> = center
            .newest_first()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(center.latest().unwrap().title, "second");
    }

    #[test]
    fn test_prune_removes_expired_toasts() {
        let mut center = NotificationCenter::new(Duration::from_millis(100));
        center.push(Notification::new("a", ""));
        assert!(!center.prune_at(Instant::now()));
        assert_eq!(center.len(), 1);

        assert!(center.prune_at(Instant::now() + Duration::from_millis(200)));
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss_latest() {
        let mut center = NotificationCenter::default();
        center.push(Notification::new("a", ""));
        center.push(Notification::new("b", ""));
        assert_eq!(center.dismiss_latest().unwrap().title, "b");
        assert_eq!(center.len(), 1);
    }
}
