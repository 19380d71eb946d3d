// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::admin::{AdminContactPage, AdminSettingsPage};
use views::{AdminSessionsPage, AdminStatusLegendPage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},

    // Admin routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminRedirect {},
        #[route("/admin/sessions")]
        AdminSessions {},
        #[route("/admin/contact")]
        AdminContact {},
        #[route("/admin/settings")]
        AdminSettings {},
        #[route("/admin/statuses/:variant")]
        AdminStatusLegend { variant: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Layout for admin routes with sidebar navigation.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        div { class: "admin-layout",
            // Sidebar navigation
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Admin" }
                }
                nav { class: "sidebar-nav",
                    div { class: "nav-section",
                        span { class: "nav-section-title", "Menu" }
                        Link {
                            to: Route::AdminSessions {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "aria-hidden": "true", "▦" }
                            span { "Sessions" }
                        }
                        Link {
                            to: Route::AdminContact {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "aria-hidden": "true", "✉" }
                            span { "Contact" }
                        }
                        Link {
                            to: Route::AdminStatusLegend { variant: "session".to_string() },
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "aria-hidden": "true", "◐" }
                            span { "Statuses" }
                        }
                        Link {
                            to: Route::AdminSettings {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "aria-hidden": "true", "⚙" }
                            span { "Settings" }
                        }
                    }
                }
            }

            // Main content area
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect / to the admin area.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::AdminSessions {});
    });
    rsx! {}
}

/// Redirect /admin to /admin/sessions.
#[component]
fn AdminRedirect() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::AdminSessions {});
    });
    rsx! {}
}

/// Session bookings page.
#[component]
fn AdminSessions() -> Element {
    rsx! {
        AdminSessionsPage {}
    }
}

/// Contact submissions page.
#[component]
fn AdminContact() -> Element {
    rsx! {
        AdminContactPage {}
    }
}

/// Settings page.
#[component]
fn AdminSettings() -> Element {
    rsx! {
        AdminSettingsPage {}
    }
}

/// Status legend page.
#[component]
fn AdminStatusLegend(variant: String) -> Element {
    rsx! {
        AdminStatusLegendPage { variant }
    }
}

#[cfg(test)]
mod tests {
    use dashboard_core::StatusCategory;
    use ui::admin::{LoaderSize, badge_class};

    const STYLESHEETS: [&str; 2] = [
        include_str!("../assets/main.css"),
        include_str!("../assets/admin.css"),
    ];

    fn has_rule(class: &str) -> bool {
        let selector = format!(".{class} {{");
        STYLESHEETS.iter().any(|css| css.contains(&selector))
    }

    #[test]
    fn every_badge_class_is_styled() {
        let missing: Vec<&str> = StatusCategory::ALL
            .iter()
            .map(|c| badge_class(*c))
            .filter(|class| !has_rule(class))
            .collect();
        assert!(missing.is_empty(), "unstyled badge classes: {missing:?}");
    }

    #[test]
    fn every_loader_class_is_styled() {
        let missing: Vec<&str> = LoaderSize::ALL
            .iter()
            .flat_map(|size| [size.spinner_class(), size.label_class()])
            .filter(|class| !has_rule(class))
            .collect();
        assert!(missing.is_empty(), "unstyled loader classes: {missing:?}");
    }

    #[test]
    fn shared_component_classes_are_styled() {
        let classes = [
            "status-badge",
            "spinner",
            "inline-loader",
            "sr-only",
            "animated-card",
            "dialog-backdrop",
            "dialog-content",
            "dialog-footer",
            "form-success",
            "empty-state",
            "empty-state-action",
        ];
        let missing: Vec<&str> = classes.into_iter().filter(|class| !has_rule(class)).collect();
        assert!(missing.is_empty(), "unstyled classes: {missing:?}");
    }
}
