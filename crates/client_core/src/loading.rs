use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use shared::domain::{ActionKind, CourseId};

/// Identifies one in-flight action on one course.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadingKey {
    pub kind: ActionKind,
    pub course_id: CourseId,
}

impl LoadingKey {
    pub fn new(kind: ActionKind, course_id: CourseId) -> Self {
        Self { kind, course_id }
    }
}

impl fmt::Display for LoadingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.key_prefix(), self.course_id)
    }
}

/// In-flight flags keyed by `(ActionKind, CourseId)`. A key that is not
/// present reads as not loading.
///
/// Cloning yields another handle onto the same set. Only the dispatcher
/// writes; everything else reads.
#[derive(Debug, Clone, Default)]
pub struct LoadingRegistry {
    in_flight: Arc<Mutex<HashSet<LoadingKey>>>,
}

impl LoadingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self, key: &LoadingKey) -> bool {
        self.lock().contains(key)
    }

    /// Snapshot of every key currently marked loading.
    pub fn in_flight(&self) -> Vec<LoadingKey> {
        self.lock().iter().cloned().collect()
    }

    /// Last write wins. Returns whether the stored value changed.
    pub(crate) fn set_loading(&self, key: &LoadingKey, value: bool) -> bool {
        let mut in_flight = self.lock();
        if value {
            in_flight.insert(key.clone())
        } else {
            in_flight.remove(key)
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<LoadingKey>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
