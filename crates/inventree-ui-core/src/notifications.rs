//! Transient user notifications
//!
//! `Notifier` is the display capability consumed by components;
//! `NotificationCenter` is the in-process implementation the desktop UI polls.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Gray,
}

/// A message shown to the user for a limited time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable id; showing a notification with an existing id replaces it
    pub id: Option<String>,
    pub title: String,
    pub message: String,
    pub color: NotificationColor,
    /// Hide automatically after this long; `None` keeps it until hidden
    pub auto_close: Option<Duration>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            message: message.into(),
            color: NotificationColor::default(),
            auto_close: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_color(mut self, color: NotificationColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_auto_close(mut self, after: Duration) -> Self {
        self.auto_close = Some(after);
        self
    }
}

/// Notification display capability
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show(&self, notification: Notification);
    fn hide(&self, id: &str);
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub key: String,
    pub notification: Notification,
    pub shown_at: DateTime<Utc>,
}

impl ActiveNotification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self
            .notification
            .auto_close
            .and_then(|d| chrono::Duration::from_std(d).ok())
        {
            Some(after) => now >= self.shown_at + after,
            None => false,
        }
    }
}

/// In-memory list of visible notifications
#[derive(Debug, Default)]
pub struct NotificationCenter {
    visible: Mutex<Vec<ActiveNotification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification at an explicit time
    pub fn show_at(&self, notification: Notification, now: DateTime<Utc>) {
        let key = notification
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!("Notification [{}]: {}", notification.title, notification.message);

        let mut visible = self.visible.lock();
        visible.retain(|n| n.key != key);
        visible.push(ActiveNotification {
            key,
            notification,
            shown_at: now,
        });
    }

    /// Visible notifications, oldest first
    pub fn visible(&self) -> Vec<ActiveNotification> {
        self.visible.lock().clone()
    }

    /// Drop expired notifications, returning how many were removed
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut visible = self.visible.lock();
        let before = visible.len();
        visible.retain(|n| !n.is_expired(now));
        before - visible.len()
    }

    pub fn clear(&self) {
        self.visible.lock().clear();
    }
}

impl Notifier for NotificationCenter {
    fn show(&self, notification: Notification) {
        self.show_at(notification, Utc::now());
    }

    fn hide(&self, id: &str) {
        let mut visible = self.visible.lock();
        let before = visible.len();
        visible.retain(|n| n.key != id);
        if visible.len() != before {
            debug!("Hid notification: {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_show_replaces_same_id() {
        let center = NotificationCenter::new();
        center.show_at(Notification::new("A", "first").with_id("update"), at(0));
        center.show_at(Notification::new("B", "other"), at(0));
        center.show_at(Notification::new("A", "second").with_id("update"), at(1));

        let visible = center.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1].notification.message, "second");
    }

    #[test]
    fn test_hide_by_id() {
        let center = NotificationCenter::new();
        center.show(Notification::new("A", "msg").with_id("update"));
        center.hide("update");
        center.hide("missing");
        assert!(center.visible().is_empty());
    }

    #[test]
    fn test_prune_expired() {
        let center = NotificationCenter::new();
        center.show_at(
            Notification::new("Short", "gone").with_auto_close(Duration::from_millis(5000)),
            at(0),
        );
        center.show_at(Notification::new("Sticky", "stays"), at(0));

        assert_eq!(center.prune(at(4)), 0);
        assert_eq!(center.prune(at(5)), 1);

        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].notification.title, "Sticky");
    }

    #[test]
    fn test_builder_defaults() {
        let n = Notification::new("Title", "Body")
            .with_color(NotificationColor::Red)
            .with_auto_close(Duration::from_secs(5));
        assert_eq!(n.id, None);
        assert_eq!(n.color, NotificationColor::Red);
        assert_eq!(n.auto_close, Some(Duration::from_secs(5)));
    }
}
