//! Card wrapper that lifts on hover.

use dioxus::prelude::*;

/// Class list for the card in its current hover state.
pub fn card_class(hovered: bool, extra: Option<&str>) -> String {
    let mut class = String::from("animated-card");
    if hovered {
        class.push_str(" hovered");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Card container with a hover lift effect.
#[component]
pub fn AnimatedCard(children: Element, class: Option<String>) -> Element {
    let mut hovered = use_signal(|| false);
    let class = card_class(hovered(), class.as_deref());

    rsx! {
        div {
            class: "{class}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            {children}
        }
    }
}
