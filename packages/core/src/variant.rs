//! Entity hints accepted alongside a status label.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a variant name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status variant: {0}")]
pub struct ParseVariantError(pub String);

/// Which kind of admin entity a status belongs to.
///
/// Advisory only: classification never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
    #[default]
    Default,
    Session,
    Volunteer,
    Contact,
    Event,
}

impl StatusVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusVariant::Default => "default",
            StatusVariant::Session => "session",
            StatusVariant::Volunteer => "volunteer",
            StatusVariant::Contact => "contact",
            StatusVariant::Event => "event",
        }
    }

    /// Singular noun used in prompts such as "delete 3 sessions".
    pub fn entity_name(self) -> &'static str {
        match self {
            StatusVariant::Default => "item",
            other => other.as_str(),
        }
    }

    /// Status labels the backend uses for this kind of entity.
    pub fn known_statuses(self) -> &'static [&'static str] {
        match self {
            StatusVariant::Default => &[],
            StatusVariant::Session => &["pending", "confirmed", "completed", "cancelled"],
            StatusVariant::Volunteer => &["pending", "approved", "active", "inactive"],
            StatusVariant::Contact => &["new", "read", "responded"],
            StatusVariant::Event => &["published", "draft"],
        }
    }
}

impl std::fmt::Display for StatusVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(StatusVariant::Default),
            "session" => Ok(StatusVariant::Session),
            "volunteer" => Ok(StatusVariant::Volunteer),
            "contact" => Ok(StatusVariant::Contact),
            "event" => Ok(StatusVariant::Event),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}
