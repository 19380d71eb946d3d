//! Contact submissions page - scaffolding until the inbox is wired up.

use dioxus::prelude::*;

use crate::admin::{AnimatedCard, EmptyState};

/// Contact submissions page component.
#[component]
pub fn AdminContactPage() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Contact Submissions" }
                    p { class: "page-description", "Messages sent through the contact form" }
                }
                button { class: "btn btn-secondary", disabled: true, "Export CSV" }
            }

            AnimatedCard { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Inbox" }
                }
                EmptyState {
                    icon: "✉",
                    title: "Nothing to show yet",
                    description: "Contact submissions will be available here",
                }
            }
        }
    }
}
