use std::{sync::Arc, time::Duration};

use shared::{
    domain::{ActionKind, Course, CourseId},
    Catalog,
};
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::info;

pub mod config;
pub mod controls;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod identity;
pub mod loading;
pub mod notification;
pub mod transport;

pub use config::Settings;
pub use controls::ControlState;
pub use dispatcher::{ActionDispatcher, DispatchOutcome};
pub use error::{ConfigError, ControllerError, TransportError};
pub use events::InteractionEvent;
pub use loading::{LoadingKey, LoadingRegistry};
pub use notification::{Notification, NotificationChannel, NotificationTone};
pub use transport::{EventTransport, HttpTransport};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owns every piece of interaction state for one catalog view: the loading
/// flags, the notification slot, and the dispatcher that is the only writer
/// of both. Rendering code reads through the accessors and listens on
/// [`InteractionController::subscribe`].
pub struct InteractionController {
    catalog: Arc<Catalog>,
    loading: LoadingRegistry,
    notifications: NotificationChannel,
    dispatcher: ActionDispatcher,
    events: broadcast::Sender<InteractionEvent>,
}

impl InteractionController {
    pub fn new(
        catalog: Catalog,
        transport: Arc<dyn EventTransport>,
        notification_ttl: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let loading = LoadingRegistry::new();
        let notifications = NotificationChannel::new(notification_ttl, events.clone());
        let dispatcher = ActionDispatcher::new(
            transport,
            loading.clone(),
            notifications.clone(),
            events.clone(),
        );
        Self {
            catalog: Arc::new(catalog),
            loading,
            notifications,
            dispatcher,
            events,
        }
    }

    /// Controller posting over HTTP to the collector named in `settings`.
    pub fn from_settings(catalog: Catalog, settings: &Settings) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&settings.collector_url, settings.request_timeout)?;
        info!(
            collector_url = %settings.collector_url,
            courses = catalog.len(),
            "interaction controller ready"
        );
        Ok(Self::new(
            catalog,
            Arc::new(transport),
            settings.notification_ttl,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_loading(&self, kind: ActionKind, course_id: &CourseId) -> bool {
        self.loading
            .is_loading(&LoadingKey::new(kind, course_id.clone()))
    }

    pub fn loading(&self) -> &LoadingRegistry {
        &self.loading
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn control_state(&self, course: &Course, kind: ActionKind) -> ControlState {
        controls::control_state(course, kind, self.is_loading(kind, &course.id))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InteractionEvent> {
        self.events.subscribe()
    }

    /// Looks the course up in the catalog and dispatches. Unknown ids touch
    /// no state.
    pub fn trigger(
        &self,
        course_id: &CourseId,
        kind: ActionKind,
    ) -> Result<JoinHandle<DispatchOutcome>, ControllerError> {
        let course = self
            .catalog
            .get(course_id)
            .ok_or_else(|| ControllerError::UnknownCourse(course_id.clone()))?;
        Ok(self.dispatcher.dispatch(course, kind))
    }

    pub fn dispatch(&self, course: &Course, kind: ActionKind) -> JoinHandle<DispatchOutcome> {
        self.dispatcher.dispatch(course, kind)
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
