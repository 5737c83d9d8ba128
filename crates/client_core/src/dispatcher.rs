//! Turns a (course, action) click into one collector submission and one
//! notification.

use std::sync::Arc;

use reqwest::StatusCode;
use shared::{
    domain::{ActionKind, Course},
    protocol::EventPayload,
};
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    events::InteractionEvent,
    identity::new_user_id,
    loading::{LoadingKey, LoadingRegistry},
    notification::{NotificationChannel, NotificationTone},
    transport::EventTransport,
};

pub const PURCHASE_FAILED_MESSAGE: &str = "❌ Purchase failed. Please try again.";
pub const ENROLLMENT_FAILED_MESSAGE: &str = "❌ Enrollment failed. Please try again.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "🔌 Connection error. Please check if services are running.";

/// How a single submission settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Accepted,
    Rejected { status: StatusCode },
    Unreachable,
}

pub fn success_message(course: &Course, kind: ActionKind) -> String {
    match kind.enrollment_type() {
        None => format!(
            "🎉 Purchase initiated for \"{}\"! Processing payment...",
            course.title
        ),
        Some(enrollment) => format!(
            "{} Enrolled in \"{}\" as {} student!",
            enrollment.glyph(),
            course.title,
            enrollment.display_name()
        ),
    }
}

pub fn rejection_message(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Purchase => PURCHASE_FAILED_MESSAGE,
        ActionKind::FreeTrialEnrollment | ActionKind::AuditEnrollment => {
            ENROLLMENT_FAILED_MESSAGE
        }
    }
}

/// Marks a key loading for as long as it is alive. Dropping it clears the
/// flag, so every exit path of a dispatch releases the key, including abort
/// and panic.
struct LoadingGuard {
    registry: LoadingRegistry,
    events: broadcast::Sender<InteractionEvent>,
    key: LoadingKey,
}

impl LoadingGuard {
    fn acquire(
        registry: LoadingRegistry,
        events: broadcast::Sender<InteractionEvent>,
        key: LoadingKey,
    ) -> Self {
        if !registry.set_loading(&key, true) {
            debug!(%key, "dispatch issued while key already loading");
        }
        let _ = events.send(InteractionEvent::LoadingChanged {
            key: key.clone(),
            loading: true,
        });
        Self {
            registry,
            events,
            key,
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.registry.set_loading(&self.key, false);
        let _ = self.events.send(InteractionEvent::LoadingChanged {
            key: self.key.clone(),
            loading: false,
        });
    }
}

#[derive(Clone)]
pub struct ActionDispatcher {
    transport: Arc<dyn EventTransport>,
    loading: LoadingRegistry,
    notifications: NotificationChannel,
    events: broadcast::Sender<InteractionEvent>,
}

impl ActionDispatcher {
    pub fn new(
        transport: Arc<dyn EventTransport>,
        loading: LoadingRegistry,
        notifications: NotificationChannel,
        events: broadcast::Sender<InteractionEvent>,
    ) -> Self {
        Self {
            transport,
            loading,
            notifications,
            events,
        }
    }

    /// Fire-and-forget. The loading flag is set before this returns; the
    /// submission runs on a spawned task. Must be called within a Tokio
    /// runtime.
    ///
    /// A second dispatch on a key that is already loading is not rejected.
    pub fn dispatch(&self, course: &Course, kind: ActionKind) -> JoinHandle<DispatchOutcome> {
        let guard = self.acquire(course, kind);
        let dispatcher = self.clone();
        let course = course.clone();
        tokio::spawn(async move { dispatcher.settle(guard, &course, kind).await })
    }

    /// Same contract as [`ActionDispatcher::dispatch`], awaited on the
    /// caller's task.
    pub async fn execute(&self, course: &Course, kind: ActionKind) -> DispatchOutcome {
        let guard = self.acquire(course, kind);
        self.settle(guard, course, kind).await
    }

    fn acquire(&self, course: &Course, kind: ActionKind) -> LoadingGuard {
        LoadingGuard::acquire(
            self.loading.clone(),
            self.events.clone(),
            LoadingKey::new(kind, course.id.clone()),
        )
    }

    async fn settle(
        &self,
        guard: LoadingGuard,
        course: &Course,
        kind: ActionKind,
    ) -> DispatchOutcome {
        let user_id = new_user_id();
        let payload = EventPayload::for_action(course, kind, user_id);
        info!(
            key = %guard.key,
            user_id = %payload.user_id(),
            "submitting interest event"
        );

        let outcome = match self.transport.submit(kind, &payload).await {
            Ok(status) if status.is_success() => {
                self.notifications
                    .post(success_message(course, kind), NotificationTone::Success);
                DispatchOutcome::Accepted
            }
            Ok(status) => {
                warn!(key = %guard.key, %status, "collector rejected event");
                self.notifications
                    .post(rejection_message(kind), NotificationTone::Rejected);
                DispatchOutcome::Rejected { status }
            }
            Err(err) => {
                error!(key = %guard.key, error = %err, "event submission failed");
                self.notifications
                    .post(CONNECTION_ERROR_MESSAGE, NotificationTone::Connectivity);
                DispatchOutcome::Unreachable
            }
        };

        info!(key = %guard.key, ?outcome, "interest event settled");
        drop(guard);
        outcome
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
