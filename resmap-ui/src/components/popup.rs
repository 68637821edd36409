//! Attribute popup anchored to the map by the overlay.

use dioxus::prelude::*;

use crate::js_bridge;
use crate::state::AppState;

/// The popup element the map overlay positions. Rendered once; the map
/// library moves the element around the viewport, Dioxus only swaps its
/// content in place.
#[component]
pub fn MapPopup() -> Element {
    let mut state = use_context::<AppState>();
    let info = state.popup.read().clone();

    let on_close = move |evt: Event<MouseData>| {
        evt.prevent_default();
        js_bridge::clear_overlay();
        state.popup.set(None);
    };

    rsx! {
        div {
            id: "popup",
            class: "ol-popup",
            a {
                id: "popup-closer",
                class: "ol-popup-closer",
                href: "#",
                onclick: on_close,
            }
            div {
                id: "popup-content",
                if let Some(info) = info {
                    p {
                        "Reservoir: {info.name}"
                        br {}
                        "Stored water: {info.storage} acre-feet"
                        br {}
                        "Total capacity: {info.capacity} acre-feet"
                    }
                }
            }
        }
    }
}
