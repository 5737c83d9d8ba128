use serde::{Deserialize, Serialize};

use crate::domain::{ActionKind, Course, CourseId, EnrollmentType, EphemeralUserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyEventRequest {
    pub course_id: CourseId,
    pub user_id: EphemeralUserId,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollEventRequest {
    pub course_id: CourseId,
    pub user_id: EphemeralUserId,
    pub enrollment_type: EnrollmentType,
}

/// Body posted to the collector for one user interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Buy(BuyEventRequest),
    Enroll(EnrollEventRequest),
}

impl EventPayload {
    pub fn for_action(course: &Course, kind: ActionKind, user_id: EphemeralUserId) -> Self {
        match kind.enrollment_type() {
            None => Self::Buy(BuyEventRequest {
                course_id: course.id.clone(),
                user_id,
                price: course.price,
            }),
            Some(enrollment_type) => Self::Enroll(EnrollEventRequest {
                course_id: course.id.clone(),
                user_id,
                enrollment_type,
            }),
        }
    }

    pub fn course_id(&self) -> &CourseId {
        match self {
            Self::Buy(req) => &req.course_id,
            Self::Enroll(req) => &req.course_id,
        }
    }

    pub fn user_id(&self) -> &EphemeralUserId {
        match self {
            Self::Buy(req) => &req.user_id,
            Self::Enroll(req) => &req.user_id,
        }
    }
}
