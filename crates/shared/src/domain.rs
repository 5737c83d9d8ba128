use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(CourseId);
id_newtype!(EphemeralUserId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

/// One purchasable/enrollable catalog entry. Never mutated once the catalog
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub price: f64,
    #[serde(rename = "duration")]
    pub duration_label: String,
    pub level: Level,
    #[serde(rename = "students")]
    pub student_count: u64,
    pub rating: f64,
    pub description: String,
    pub category: String,
    #[serde(rename = "icon")]
    pub icon_glyph: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentType {
    #[serde(rename = "free-trial")]
    FreeTrial,
    #[serde(rename = "audit")]
    Audit,
}

impl EnrollmentType {
    /// Wire value sent as `enrollmentType`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FreeTrial => "free-trial",
            Self::Audit => "audit",
        }
    }

    /// Human form used in enrollment confirmations.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FreeTrial => "free trial",
            Self::Audit => "audit",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::FreeTrial => "🎯",
            Self::Audit => "📖",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Purchase,
    FreeTrialEnrollment,
    AuditEnrollment,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Purchase,
        ActionKind::FreeTrialEnrollment,
        ActionKind::AuditEnrollment,
    ];

    /// Collector path this action is posted to.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Purchase => "/api/events/buy",
            Self::FreeTrialEnrollment | Self::AuditEnrollment => "/api/events/enroll",
        }
    }

    pub fn enrollment_type(self) -> Option<EnrollmentType> {
        match self {
            Self::Purchase => None,
            Self::FreeTrialEnrollment => Some(EnrollmentType::FreeTrial),
            Self::AuditEnrollment => Some(EnrollmentType::Audit),
        }
    }

    /// Prefix of the textual loading key, e.g. `buy_java-fundamentals`.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Purchase => "buy",
            Self::FreeTrialEnrollment => "free-trial",
            Self::AuditEnrollment => "audit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "buy" | "purchase" => Some(Self::Purchase),
            "free-trial" | "free_trial" | "trial" => Some(Self::FreeTrialEnrollment),
            "audit" => Some(Self::AuditEnrollment),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}
