//! Empty state shown in place of an empty list.

use dioxus::prelude::*;

/// Props for EmptyState component.
#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    /// Glyph rendered above the title.
    #[props(into, default = "▦".to_string())]
    pub icon: String,
    /// Headline, e.g. "No sessions yet".
    #[props(into)]
    pub title: String,
    /// Supporting text under the title.
    #[props(into)]
    pub description: String,
    /// Optional call to action rendered beneath the description.
    pub action: Option<Element>,
}

/// Placeholder block for lists with no entries.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div { class: "empty-state",
            div {
                class: "empty-state-icon",
                "aria-hidden": "true",
                "{props.icon}"
            }
            h3 { class: "empty-state-title", "{props.title}" }
            p { class: "empty-state-description", "{props.description}" }

            if let Some(action) = props.action {
                div { class: "empty-state-action", {action} }
            }
        }
    }
}
