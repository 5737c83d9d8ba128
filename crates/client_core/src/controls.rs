//! What a rendering surface should draw for each action control.

use shared::domain::{ActionKind, Course};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub label: String,
    pub enabled: bool,
}

pub fn control_state(course: &Course, kind: ActionKind, loading: bool) -> ControlState {
    let label = match (kind, loading) {
        (ActionKind::Purchase, true) => "Processing...".to_string(),
        (ActionKind::Purchase, false) => format!("Buy Now - ${}", course.price),
        (_, true) => "Enrolling...".to_string(),
        (ActionKind::FreeTrialEnrollment, false) => "Free Trial".to_string(),
        (ActionKind::AuditEnrollment, false) => "Audit Course".to_string(),
    };
    ControlState {
        label,
        enabled: !loading,
    }
}
