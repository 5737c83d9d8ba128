//! Single-slot, auto-dismissing user notification.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use chrono::{DateTime, Utc};
use tokio::{
    runtime::Handle,
    sync::broadcast,
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::debug;

use crate::events::InteractionEvent;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTone {
    Success,
    Rejected,
    Connectivity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub tone: NotificationTone,
    pub posted_at: DateTime<Utc>,
    pub expires_at: Instant,
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    generation: u64,
    dismiss_task: Option<JoinHandle<()>>,
}

/// Holds at most one visible message. A new post replaces the visible one and
/// restarts the dismissal timer; nothing is queued.
#[derive(Clone)]
pub struct NotificationChannel {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
    events: broadcast::Sender<InteractionEvent>,
}

impl NotificationChannel {
    pub fn new(ttl: Duration, events: broadcast::Sender<InteractionEvent>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
            events,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The visible notification, if any. Never returns one past its
    /// `expires_at`, even before the dismissal task has run.
    pub fn current(&self) -> Option<Notification> {
        let now = Instant::now();
        self.lock()
            .current
            .as_ref()
            .filter(|notification| notification.expires_at > now)
            .cloned()
    }

    pub(crate) fn post(&self, message: impl Into<String>, tone: NotificationTone) -> Notification {
        let notification = Notification {
            message: message.into(),
            tone,
            posted_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        };

        let mut slot = self.lock();
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        let expires_at = notification.expires_at;
        if let Some(previous) = slot.dismiss_task.take() {
            previous.abort();
        }
        if let Some(replaced) = slot.current.replace(notification.clone()) {
            debug!(replaced = %replaced.message, "notification superseded");
        }
        // Without a runtime there is no timer; `current` still hides the
        // message once it expires.
        slot.dismiss_task = Handle::try_current()
            .ok()
            .map(|handle| handle.spawn(self.clone().dismiss_at(expires_at, generation)));
        let _ = self
            .events
            .send(InteractionEvent::NotificationPosted(notification.clone()));

        notification
    }

    async fn dismiss_at(self, deadline: Instant, generation: u64) {
        sleep_until(deadline).await;

        let mut slot = self.lock();
        if slot.generation != generation || slot.current.is_none() {
            return;
        }
        slot.current = None;
        slot.dismiss_task = None;
        debug!("notification dismissed");
        let _ = self.events.send(InteractionEvent::NotificationCleared);
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/notification_tests.rs"]
mod tests;
