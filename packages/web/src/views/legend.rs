//! Status legend page: which badge each entity's statuses get.

use dashboard_core::{StatusCategory, StatusVariant};
use dioxus::prelude::*;
use ui::admin::{AnimatedCard, EmptyState, StatusBadge};

use crate::Route;

const LEGEND_VARIANTS: [StatusVariant; 4] = [
    StatusVariant::Session,
    StatusVariant::Volunteer,
    StatusVariant::Contact,
    StatusVariant::Event,
];

/// Status labels of a variant paired with their category.
fn legend_rows(variant: StatusVariant) -> Vec<(&'static str, StatusCategory)> {
    variant
        .known_statuses()
        .iter()
        .map(|status| (*status, StatusCategory::classify(status)))
        .collect()
}

/// Status legend page component; `variant` comes from the URL.
#[component]
pub fn AdminStatusLegendPage(variant: String) -> Element {
    let parsed = variant.parse::<StatusVariant>();
    if let Err(ref err) = parsed {
        tracing::debug!(%err, "status legend requested for unknown variant");
    }
    let badge_variant = parsed.clone().unwrap_or_default();
    let error = parsed.as_ref().err().map(ToString::to_string);
    let rows = parsed.map(legend_rows).unwrap_or_default();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Statuses" }
                    p { class: "page-description", "Status labels and the badge each one gets" }
                }
            }

            nav { class: "variant-tabs",
                for v in LEGEND_VARIANTS {
                    Link {
                        to: Route::AdminStatusLegend { variant: v.as_str().to_string() },
                        class: "btn btn-secondary",
                        active_class: "active",
                        "{v.entity_name()}"
                    }
                }
            }

            AnimatedCard { class: "card",
                if let Some(error) = error {
                    EmptyState {
                        icon: "?",
                        title: "Unknown status group",
                        description: error,
                    }
                } else if rows.is_empty() {
                    EmptyState {
                        title: "No fixed statuses",
                        description: "This group accepts any label; unknown labels use the default badge.",
                    }
                } else {
                    ul { class: "legend-list",
                        for (status, category) in rows {
                            li { key: "{status}", class: "legend-item",
                                StatusBadge { status, variant: badge_variant }
                                span { class: "text-muted", "{category}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_legend_follows_backend_vocabulary() {
        let rows = legend_rows(StatusVariant::Session);
        assert_eq!(
            rows,
            vec![
                ("pending", StatusCategory::Pending),
                ("confirmed", StatusCategory::Confirmed),
                ("completed", StatusCategory::Completed),
                ("cancelled", StatusCategory::Cancelled),
            ]
        );
    }

    #[test]
    fn volunteer_approved_and_active_share_a_badge() {
        let rows = legend_rows(StatusVariant::Volunteer);
        assert!(rows.contains(&("approved", StatusCategory::Active)));
        assert!(rows.contains(&("active", StatusCategory::Active)));
    }

    #[test]
    fn default_variant_has_no_rows() {
        assert!(legend_rows(StatusVariant::Default).is_empty());
    }

    #[test]
    fn route_segment_parses_into_variant() {
        assert_eq!("contact".parse::<StatusVariant>().ok(), Some(StatusVariant::Contact));
        let err = "blog".parse::<StatusVariant>().err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("unknown status variant: blog"));
    }
}
