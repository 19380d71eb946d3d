//! Status categories and the label classification table.

use serde::{Deserialize, Serialize};

/// Visual category assigned to a free-text status label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Waiting on an admin decision.
    Pending,
    /// Booking accepted.
    Confirmed,
    /// Booking or payment finished.
    Completed,
    /// Withdrawn before completion.
    Cancelled,
    /// Approved or currently active.
    Active,
    /// No longer active.
    Inactive,
    /// Unread submission.
    New,
    /// Submission seen by an admin.
    Read,
    /// Submission answered.
    Responded,
    /// Content visible to visitors.
    Published,
    /// Content not yet visible.
    Draft,
    /// Anything the table does not recognize.
    #[default]
    Default,
}

/// Ordered lookup table: first matching key wins.
const STATUS_RULES: &[(&str, StatusCategory)] = &[
    ("pending", StatusCategory::Pending),
    ("confirmed", StatusCategory::Confirmed),
    ("completed", StatusCategory::Completed),
    ("cancelled", StatusCategory::Cancelled),
    ("approved", StatusCategory::Active),
    ("active", StatusCategory::Active),
    ("inactive", StatusCategory::Inactive),
    ("new", StatusCategory::New),
    ("read", StatusCategory::Read),
    ("responded", StatusCategory::Responded),
    ("published", StatusCategory::Published),
    ("draft", StatusCategory::Draft),
];

impl StatusCategory {
    /// Every category, in rule order with the fallback last.
    pub const ALL: [StatusCategory; 12] = [
        StatusCategory::Pending,
        StatusCategory::Confirmed,
        StatusCategory::Completed,
        StatusCategory::Cancelled,
        StatusCategory::Active,
        StatusCategory::Inactive,
        StatusCategory::New,
        StatusCategory::Read,
        StatusCategory::Responded,
        StatusCategory::Published,
        StatusCategory::Draft,
        StatusCategory::Default,
    ];

    /// Classify a status label, ignoring case and surrounding whitespace.
    ///
    /// Total: labels without a rule resolve to [`StatusCategory::Default`].
    pub fn classify(label: &str) -> Self {
        let key = label.trim().to_lowercase();
        STATUS_RULES
            .iter()
            .find(|(rule, _)| *rule == key)
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Get a simple category string for display and CSS hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Pending => "pending",
            StatusCategory::Confirmed => "confirmed",
            StatusCategory::Completed => "completed",
            StatusCategory::Cancelled => "cancelled",
            StatusCategory::Active => "active",
            StatusCategory::Inactive => "inactive",
            StatusCategory::New => "new",
            StatusCategory::Read => "read",
            StatusCategory::Responded => "responded",
            StatusCategory::Published => "published",
            StatusCategory::Draft => "draft",
            StatusCategory::Default => "default",
        }
    }

    /// Check if the category is a final outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StatusCategory::Completed | StatusCategory::Cancelled | StatusCategory::Responded
        )
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
