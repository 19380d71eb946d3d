//! Settings page - scaffolding until settings are editable.

use dioxus::prelude::*;

use crate::admin::AnimatedCard;

/// One disabled settings section.
#[component]
fn SettingsSection(
    #[props(into)] title: String,
    #[props(into)] description: String,
    fields: Vec<&'static str>,
) -> Element {
    rsx! {
        AnimatedCard { class: "settings-section",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
                p { class: "card-description", "{description}" }
            }
            div { class: "form-stack",
                for field in fields {
                    div { class: "form-group",
                        label { class: "form-label", "{field}" }
                        input {
                            class: "input",
                            disabled: true,
                            placeholder: "Coming soon",
                        }
                    }
                }
            }
        }
    }
}

/// Settings page component.
#[component]
pub fn AdminSettingsPage() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Settings" }
                    p { class: "page-description", "Settings will be available here" }
                }
            }

            div { class: "settings-grid",
                SettingsSection {
                    title: "General",
                    description: "Site name, contact email and time zone.",
                    fields: vec!["Site name", "Support email", "Time zone"],
                }
                SettingsSection {
                    title: "Notifications",
                    description: "Emails sent when bookings and messages arrive.",
                    fields: vec!["Booking alerts", "Contact form alerts"],
                }
                SettingsSection {
                    title: "Security",
                    description: "Admin sessions and password policy.",
                    fields: vec!["Session timeout", "Minimum password length"],
                }
            }

            div { class: "page-actions",
                button { class: "btn btn-primary", disabled: true, "Save changes" }
            }
        }
    }
}
