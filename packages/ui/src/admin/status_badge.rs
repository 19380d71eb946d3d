//! Status badge component.

use dashboard_core::{StatusCategory, StatusVariant};
use dioxus::prelude::*;

/// Badge class for each status category, styled in `admin.css`.
pub fn badge_class(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Pending => "badge-pending",
        StatusCategory::Confirmed => "badge-confirmed",
        StatusCategory::Completed => "badge-completed",
        StatusCategory::Cancelled => "badge-cancelled",
        StatusCategory::Active => "badge-active",
        StatusCategory::Inactive => "badge-inactive",
        StatusCategory::New => "badge-new",
        StatusCategory::Read => "badge-read",
        StatusCategory::Responded => "badge-responded",
        StatusCategory::Published => "badge-published",
        StatusCategory::Draft => "badge-draft",
        StatusCategory::Default => "badge-default",
    }
}

/// Badge for displaying a free-text status label.
///
/// The `variant` is exposed as `data-variant` for styling hooks; it does not
/// change which category the label falls into.
#[component]
pub fn StatusBadge(
    #[props(into)] status: String,
    #[props(default)] variant: StatusVariant,
) -> Element {
    let category = StatusCategory::classify(&status);
    if category == StatusCategory::Default {
        tracing::trace!(%status, %variant, "status label has no category");
    }
    let color_class = badge_class(category);

    rsx! {
        span {
            class: "status-badge {color_class}",
            "data-category": category.as_str(),
            "data-variant": variant.as_str(),
            "{status}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_its_own_class() {
        let mut classes: Vec<&str> = StatusCategory::ALL.iter().map(|c| badge_class(*c)).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), StatusCategory::ALL.len());
    }

    #[test]
    fn approved_label_uses_active_class() {
        let approved = badge_class(StatusCategory::classify("Approved"));
        assert_eq!(approved, badge_class(StatusCategory::Active));
    }

    #[test]
    fn unknown_label_uses_default_class() {
        assert_eq!(badge_class(StatusCategory::classify("zzz")), "badge-default");
    }
}
