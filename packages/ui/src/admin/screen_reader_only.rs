//! Accessibility helpers.

use dioxus::prelude::*;

/// Content announced by screen readers but not shown on screen.
#[component]
pub fn ScreenReaderOnly(children: Element) -> Element {
    rsx! {
        span { class: "sr-only", {children} }
    }
}
