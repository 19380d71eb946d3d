//! Session bookings page backed by in-memory demo records.

use dashboard_core::{AdminRecord, StatusCategory, StatusVariant, pluralize};
use dioxus::prelude::*;
use ui::admin::{
    AnimatedCard, ConfirmationDialog, EmptyState, FormSuccessMessage, InlineLoader, LoaderSize,
    StatusBadge,
};

/// Simulated round trip for the delete request.
const DELETE_DELAY_MS: u32 = 600;

fn demo_sessions() -> Vec<AdminRecord> {
    [
        ("s-101", "Asha Rao", "Individual · Weekday evenings", "pending"),
        ("s-102", "Daniel Okafor", "Group · Saturday mornings", "Confirmed"),
        ("s-103", "Meera Iyer", "Individual · Weekday mornings", "completed"),
        ("s-104", "Tom Lindqvist", "Individual · Flexible", "cancelled"),
        ("s-105", "Priya Nair", "Group · Weekday evenings", "PENDING"),
    ]
    .into_iter()
    .map(|(id, name, details, status)| {
        AdminRecord::new(id, name, StatusVariant::Session)
            .with_subtitle(details)
            .with_status(status)
    })
    .collect()
}

/// Records that pass the status filter.
fn filter_records(records: &[AdminRecord], filter: Option<StatusCategory>) -> Vec<AdminRecord> {
    records
        .iter()
        .filter(|r| filter.is_none_or(|f| r.category() == f))
        .cloned()
        .collect()
}

/// Selected ids whose rows are currently shown; hidden rows are never deleted.
fn selected_in_view(selected: &[String], visible: &[AdminRecord]) -> Vec<String> {
    selected
        .iter()
        .filter(|id| visible.iter().any(|r| r.id == **id))
        .cloned()
        .collect()
}

/// Session bookings page component.
#[component]
pub fn AdminSessionsPage() -> Element {
    let mut records = use_signal(demo_sessions);
    let mut selected = use_signal(Vec::<String>::new);
    let mut filter = use_signal(|| None::<StatusCategory>);
    let mut dialog_open = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut success = use_signal(|| None::<String>);

    let visible = filter_records(&records(), filter());
    let selected_count = selected_in_view(&selected(), &visible).len();
    let entity = StatusVariant::Session.entity_name();

    let mut toggle = move |id: String| {
        let mut ids = selected.write();
        if let Some(pos) = ids.iter().position(|s| *s == id) {
            ids.remove(pos);
        } else {
            ids.push(id);
        }
    };

    let on_confirm = move |_| {
        spawn(async move {
            is_deleting.set(true);

            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(DELETE_DELAY_MS).await;

            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(DELETE_DELAY_MS as u64)).await;

            let ids = selected_in_view(&selected(), &filter_records(&records(), filter()));
            records.write().retain(|r| !ids.contains(&r.id));
            tracing::info!(count = ids.len(), "deleted session bookings");

            success.set(Some(format!(
                "Deleted {} {}",
                ids.len(),
                pluralize(entity, ids.len())
            )));
            selected.write().retain(|id| !ids.contains(id));
            is_deleting.set(false);
            dialog_open.set(false);
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Sessions" }
                    p { class: "page-description", "Therapy session bookings" }
                }
                if is_deleting() {
                    InlineLoader { size: LoaderSize::Small, label: "Removing bookings".to_string() }
                }
                button {
                    class: "btn btn-danger",
                    disabled: selected_count == 0,
                    onclick: move |_| {
                        success.set(None);
                        dialog_open.set(true);
                    },
                    "Delete selected ({selected_count})"
                }
            }

            FormSuccessMessage { message: success() }

            div { class: "filter-bar",
                label { r#for: "status-filter", "Status" }
                select {
                    id: "status-filter",
                    onchange: move |e| {
                        let value = e.value();
                        filter.set(if value.is_empty() { None } else { Some(StatusCategory::classify(&value)) });
                    },
                    option { value: "", "All" }
                    for status in StatusVariant::Session.known_statuses() {
                        option { value: "{status}", "{status}" }
                    }
                }
            }

            AnimatedCard { class: "card",
                if records().is_empty() {
                    EmptyState {
                        title: "No sessions",
                        description: "Session bookings will appear here once clients book.",
                        action: rsx! {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| records.set(demo_sessions()),
                                "Restore demo data"
                            }
                        },
                    }
                } else if visible.is_empty() {
                    EmptyState {
                        icon: "⌕",
                        title: "No matching sessions",
                        description: "Try a different status filter.",
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th {}
                                    th { "Client" }
                                    th { "Details" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for record in visible.iter() {
                                    {
                                        let id = record.id.clone();
                                        let is_selected = selected().contains(&record.id);
                                        let closed = record.category().is_terminal();
                                        let subtitle = record.subtitle.clone().unwrap_or_default();

                                        rsx! {
                                            tr { key: "{record.id}", class: "data-row",
                                                td {
                                                    input {
                                                        r#type: "checkbox",
                                                        "aria-label": "Select {record.title}",
                                                        checked: is_selected,
                                                        onchange: move |_| toggle(id.clone()),
                                                    }
                                                }
                                                td { "{record.title}" }
                                                td { class: "text-muted", "{subtitle}" }
                                                td {
                                                    StatusBadge { status: record.status.clone(), variant: record.variant }
                                                    if closed {
                                                        span { class: "hint", "closed" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ConfirmationDialog {
                is_open: dialog_open(),
                count: selected_count,
                entity_name: entity,
                is_deleting: is_deleting(),
                on_confirm: on_confirm,
                on_close: move |_| dialog_open.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_sessions_use_session_vocabulary() {
        let known = StatusVariant::Session.known_statuses();
        for record in demo_sessions() {
            assert_eq!(record.variant, StatusVariant::Session);
            assert!(known.contains(&record.status.to_lowercase().as_str()));
        }
    }

    #[test]
    fn filter_keeps_matching_categories() {
        let pending = filter_records(&demo_sessions(), Some(StatusCategory::Pending));
        let ids: Vec<&str> = pending.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s-101", "s-105"]);
        assert_eq!(filter_records(&demo_sessions(), None).len(), 5);
    }

    #[test]
    fn hidden_selection_is_not_counted() {
        let selected = vec!["s-101".to_string(), "s-103".to_string()];
        let visible = filter_records(&demo_sessions(), Some(StatusCategory::Pending));
        assert_eq!(selected_in_view(&selected, &visible), vec!["s-101".to_string()]);
    }

    #[test]
    fn unfiltered_selection_is_kept_whole() {
        let selected = vec!["s-102".to_string(), "s-104".to_string()];
        let visible = filter_records(&demo_sessions(), None);
        assert_eq!(selected_in_view(&selected, &visible), selected);
    }

    #[test]
    fn demo_sessions_have_unique_ids() {
        let mut ids: Vec<String> = demo_sessions().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), demo_sessions().len());
    }
}
