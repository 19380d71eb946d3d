//! Inline spinner for pending sections.

use dioxus::prelude::*;

use super::ScreenReaderOnly;

/// Spinner size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoaderSize {
    pub const ALL: [LoaderSize; 3] = [LoaderSize::Small, LoaderSize::Medium, LoaderSize::Large];

    /// Spinner class, styled in `admin.css`.
    pub fn spinner_class(self) -> &'static str {
        match self {
            LoaderSize::Small => "spinner-sm",
            LoaderSize::Medium => "spinner-md",
            LoaderSize::Large => "spinner-lg",
        }
    }

    /// Class for the label next to the spinner.
    pub fn label_class(self) -> &'static str {
        match self {
            LoaderSize::Small => "loader-label-sm",
            LoaderSize::Medium => "loader-label-md",
            LoaderSize::Large => "loader-label-lg",
        }
    }
}

/// Spinner with an optional label.
#[component]
pub fn InlineLoader(
    #[props(default)] size: LoaderSize,
    label: Option<String>,
) -> Element {
    let spinner_class = size.spinner_class();
    let label_class = size.label_class();

    rsx! {
        div {
            class: "inline-loader",
            role: "status",
            "aria-live": "polite",
            span {
                class: "spinner {spinner_class}",
                "aria-hidden": "true",
            }
            if let Some(label) = label {
                span { class: "loader-label {label_class}", "{label}" }
            } else {
                ScreenReaderOnly { "Loading..." }
            }
        }
    }
}
