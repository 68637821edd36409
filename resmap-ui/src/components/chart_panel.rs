//! Pie and bar chart panel for the selected reservoir.

use dioxus::prelude::*;
use resmap_charts::{render_bar_svg, render_pie_svg};

use crate::state::AppState;

/// Chart panel: an empty prompt until a reservoir is selected, then the
/// pie and bar SVGs stacked in an elevated card.
#[component]
pub fn ChartPanel() -> Element {
    let state = use_context::<AppState>();
    let figures = state.selected_figures.read().clone();

    match figures {
        Some(figures) => {
            let pie_svg = render_pie_svg(&figures).unwrap_or_else(|err| {
                log::error!("pie chart rendering failed: {err}");
                String::new()
            });
            let bar_svg = render_bar_svg(&figures).unwrap_or_else(|err| {
                log::error!("bar chart rendering failed: {err}");
                String::new()
            });
            rsx! {
                div {
                    class: "chart-panel chart-panel-filled",
                    h3 { "Available water vs storage capacity" }
                    p { class: "chart-subtitle", "{figures.name}" }
                    div { id: "reservoir-pie-chart", dangerous_inner_html: "{pie_svg}" }
                    div { id: "reservoir-bar-chart", dangerous_inner_html: "{bar_svg}" }
                }
            }
        }
        None => rsx! {
            div {
                class: "chart-panel",
                p {
                    class: "chart-panel-hint",
                    "Pick a reservoir's \"View chart\" to see its storage breakdown."
                }
            }
        },
    }
}
