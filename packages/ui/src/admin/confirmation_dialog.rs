//! Confirmation dialog for destructive bulk actions.

use dashboard_core::pluralize;
use dioxus::prelude::*;

/// Props for ConfirmationDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmationDialogProps {
    /// Whether the dialog is visible.
    pub is_open: bool,
    /// Number of items about to be deleted.
    pub count: usize,
    /// Singular noun for the items, e.g. "session".
    #[props(into)]
    pub entity_name: String,
    /// Callback when delete is confirmed.
    pub on_confirm: EventHandler<()>,
    /// Callback when the dialog is cancelled or dismissed.
    pub on_close: EventHandler<()>,
    /// Whether the caller's delete operation is in flight.
    #[props(default = false)]
    pub is_deleting: bool,
}

/// Body text for the dialog.
pub fn confirmation_message(count: usize, entity_name: &str) -> String {
    format!(
        "This will permanently delete {count} {}. This action cannot be undone.",
        pluralize(entity_name, count)
    )
}

/// Label for the confirm button.
pub fn confirm_label(is_deleting: bool) -> &'static str {
    if is_deleting { "Deleting..." } else { "Delete" }
}

/// Whether Escape or a backdrop click may close the dialog.
pub fn should_dismiss(is_deleting: bool) -> bool {
    !is_deleting
}

/// Whether a key press asks to dismiss the dialog.
pub fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

/// Modal asking the user to confirm deletion of `count` items.
#[component]
pub fn ConfirmationDialog(props: ConfirmationDialogProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let is_deleting = props.is_deleting;
    let message = confirmation_message(props.count, &props.entity_name);
    let count = props.count;
    let entity = props.entity_name.clone();

    let dismiss = move || {
        if should_dismiss(is_deleting) {
            tracing::debug!("confirmation dialog dismissed");
            props.on_close.call(());
        } else {
            tracing::debug!("dismiss ignored while deleting");
        }
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| dismiss(),

            div {
                class: "dialog-content",
                role: "alertdialog",
                "aria-modal": "true",
                "aria-labelledby": "confirmation-dialog-title",
                "aria-describedby": "confirmation-dialog-description",
                tabindex: "-1",
                onmounted: move |e| async move {
                    // Focus the dialog so Escape reaches the key handler.
                    if let Err(err) = e.set_focus(true).await {
                        tracing::debug!(?err, "could not focus confirmation dialog");
                    }
                },
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |e: KeyboardEvent| {
                    if is_dismiss_key(&e.key()) {
                        dismiss();
                    }
                },

                div { class: "dialog-header",
                    h2 {
                        id: "confirmation-dialog-title",
                        class: "dialog-title",
                        "Are you sure?"
                    }
                    p {
                        id: "confirmation-dialog-description",
                        class: "dialog-description",
                        "{message}"
                    }
                }

                div { class: "dialog-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: is_deleting,
                        onclick: move |_| {
                            tracing::debug!("confirmation dialog cancelled");
                            props.on_close.call(());
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: is_deleting,
                        onclick: move |_| {
                            tracing::debug!(count, entity = %entity, "delete confirmed");
                            props.on_confirm.call(());
                        },
                        {confirm_label(is_deleting)}
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
    fn message_is_singular_for_one_item() {
        assert_eq!(
            confirmation_message(1, "session"),
            "This will permanently delete 1 session. This action cannot be undone."
        );
    }

    #[test]
    fn message_is_plural_for_many_items() {
        assert!(confirmation_message(5, "session").contains("5 sessions."));
    }

    #[test]
    fn dismissal_ignored_while_deleting() {
        assert!(should_dismiss(false));
        assert!(!should_dismiss(true));
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Character("q".to_string())));
    }

    #[test]
    fn confirm_label_reflects_pending_delete() {
        assert_eq!(confirm_label(false), "Delete");
        assert_eq!(confirm_label(true), "Deleting...");
    }
}
