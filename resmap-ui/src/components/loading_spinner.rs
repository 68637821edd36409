//! Loading indicator shown while the feature list is in flight.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            "Loading reservoirs..."
        }
    }
}
