//! Rows displayed in admin lists.

use serde::{Deserialize, Serialize};

use crate::{StatusCategory, StatusVariant};

/// A single entry in an admin list (a booking, a volunteer, a message...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// Identifier supplied by the backend.
    pub id: String,
    /// Primary line, usually a person's name or a title.
    pub title: String,
    /// Secondary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Free-text status as stored by the backend.
    pub status: String,
    /// Kind of entity this row describes.
    #[serde(default)]
    pub variant: StatusVariant,
}

impl AdminRecord {
    /// Create a new record with an empty status.
    pub fn new(id: impl Into<String>, title: impl Into<String>, variant: StatusVariant) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            status: String::new(),
            variant,
        }
    }

    /// Set the subtitle for this record.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the status label for this record.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let record = AdminRecord::new("s-1", "Asha Rao", StatusVariant::Session)
            .with_subtitle("Individual therapy")
            .with_status("Confirmed");

        assert_eq!(record.id, "s-1");
        assert_eq!(record.subtitle.as_deref(), Some("Individual therapy"));
        assert_eq!(record.category(), StatusCategory::Confirmed);
    }

    #[test]
    fn empty_status_is_default_category() {
        let record = AdminRecord::new("c-1", "Hello", StatusVariant::Contact);
        assert_eq!(record.category(), StatusCategory::Default);
    }

    #[test]
    fn deserializes_without_optional_fields() -> Result<(), serde_json::Error> {
        let record: AdminRecord =
            serde_json::from_str(r#"{"id":"e-1","title":"Open mic","status":"draft"}"#)?;
        assert_eq!(record.variant, StatusVariant::Default);
        assert_eq!(record.subtitle, None);
        assert_eq!(record.category(), StatusCategory::Draft);
        Ok(())
    }
}
