//! Process-wide transient-message channel. Any component may enqueue a
//! short-lived message; the display surface polls the active stack and the
//! owner retires messages once their duration elapses.
//!
//! The center is constructed once at startup and cleared on shutdown.
//! `notify` and `dismiss` are the only mutation entry points; expiry is
//! clock-explicit (`sweep_at`) so callers decide who drives the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// The payload a component hands over; ownership passes to the center for
/// the display lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: i64,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration_ms: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration_ms,
        }
    }
}

/// A message currently on screen.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveNotification {
    pub id: NotificationId,
    pub title: String,
    pub description: String,
    pub duration_ms: i64,
    pub raised_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NotificationCenter {
    sequence: AtomicU64,
    stack: Mutex<Vec<ActiveNotification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(1),
            stack: Mutex::new(Vec::new()),
        }
    }

    /// Fire-and-forget: the message is visible immediately and retired once
    /// its duration elapses. There are no error conditions.
    pub fn notify(&self, notification: Notification) -> NotificationId {
        self.notify_at(notification, Utc::now())
    }

    pub fn notify_at(&self, notification: Notification, now: DateTime<Utc>) -> NotificationId {
        let id = NotificationId(self.sequence.fetch_add(1, Ordering::Relaxed));
        let active = ActiveNotification {
            id,
            title: notification.title,
            description: notification.description,
            duration_ms: notification.duration_ms,
            raised_at: now,
            expires_at: now + Duration::milliseconds(notification.duration_ms),
        };

        debug!(id = id.0, title = %active.title, "notification raised");
        let mut stack = self.stack.lock().expect("notification mutex poisoned");
        stack.push(active);
        id
    }

    /// Manual dismissal ahead of expiry. Returns false when the message was
    /// already retired.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut stack = self.stack.lock().expect("notification mutex poisoned");
        let before = stack.len();
        stack.retain(|active| active.id != id);
        before != stack.len()
    }

    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    /// Retires every message whose deadline has passed. Each expiry is
    /// independent; surviving messages keep their insertion order.
    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut stack = self.stack.lock().expect("notification mutex poisoned");
        let before = stack.len();
        stack.retain(|active| active.expires_at > now);
        let retired = before - stack.len();
        if retired > 0 {
            debug!(retired, "notifications expired");
        }
        retired
    }

    /// Snapshot of the visible stack in raise order.
    pub fn active(&self) -> Vec<ActiveNotification> {
        self.stack
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }

    pub fn active_count(&self) -> usize {
        self.stack.lock().expect("notification mutex poisoned").len()
    }

    /// Teardown on application shutdown.
    pub fn clear(&self) {
        self.stack
            .lock()
            .expect("notification mutex poisoned")
            .clear();
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
