//! Error banner for failed data loads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Non-fatal error banner. The map keeps working underneath it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-banner",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
