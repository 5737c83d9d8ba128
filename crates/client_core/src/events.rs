//! Change notifications published to rendering surfaces.

use crate::{loading::LoadingKey, notification::Notification};

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    LoadingChanged { key: LoadingKey, loading: bool },
    NotificationPosted(Notification),
    NotificationCleared,
}
