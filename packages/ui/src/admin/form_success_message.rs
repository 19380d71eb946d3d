//! Success banner shown after a form action.

use dioxus::prelude::*;

/// Banner with a check glyph. Renders nothing for an absent or empty message.
#[component]
pub fn FormSuccessMessage(message: Option<String>) -> Element {
    let Some(message) = message.filter(|m| !m.is_empty()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "form-success",
            role: "status",
            span { class: "form-success-icon", "aria-hidden": "true", "✓" }
            span { class: "form-success-text", "{message}" }
        }
    }
}
