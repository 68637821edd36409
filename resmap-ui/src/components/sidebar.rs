//! Sidebar list of reservoir statistic cards.

use dioxus::prelude::*;
use resmap_charts::StorageFigures;
use resmap_geo::{band, FillBand, ReservoirFeature};

use crate::state::{AppState, PopupInfo};
use crate::{js_bridge, view};

/// Sidebar container: one card per fetched reservoir feature.
#[component]
pub fn ReservoirList() -> Element {
    let state = use_context::<AppState>();
    let features = state.features.read().clone();

    rsx! {
        div {
            id: "reservoir-list",
            for feature in features.into_iter() {
                ReservoirCard { feature }
            }
        }
    }
}

/// Props for ReservoirCard
#[derive(Props, Clone, PartialEq)]
pub struct ReservoirCardProps {
    pub feature: ReservoirFeature,
}

/// One reservoir's statistics plus its "View map" and "View chart" actions.
///
/// Both handlers close over the feature record itself, so the flight and
/// the charts always act on the card they were clicked on.
#[component]
pub fn ReservoirCard(props: ReservoirCardProps) -> Element {
    let mut state = use_context::<AppState>();

    let properties = props.feature.properties.clone();
    let band_class = FillBand::classify(properties.percfull).css_class();
    let bar_width = band::bar_width_percent(properties.percfull);
    let fetched_on = (state.fetched_on)().unwrap_or_else(|| "today".to_string());

    let flight_feature = props.feature.clone();
    let on_view_map = move |_| {
        let Some((lon, lat)) = flight_feature.lon_lat() else {
            log::warn!(
                "{}: no usable geometry to fly to",
                flight_feature.properties.name
            );
            return;
        };
        let info = PopupInfo::from_feature(&flight_feature);
        let mut popup = state.popup;
        view::fly_to(lon, lat, move |complete| {
            // An interrupted flight leaves the popup alone.
            if complete {
                js_bridge::set_overlay_position(lon, lat);
                popup.set(Some(info.clone()));
            }
        });
    };

    let chart_feature = props.feature.clone();
    let on_view_chart = move |_| {
        let properties = &chart_feature.properties;
        state.selected_figures.set(Some(StorageFigures::new(
            properties.name.clone(),
            properties.conscap,
            properties.resstorage,
        )));
    };

    rsx! {
        div {
            class: "reservoir-item",
            header {
                h2 {
                    "{properties.name} "
                    button { class: "zoom-to-map", onclick: on_view_map, "View map" }
                    button { class: "show-chart", onclick: on_view_chart, "View chart" }
                }
                p { "Last updated {fetched_on}" }
            }
            div {
                class: "row-bar",
                span {
                    class: "bar-color {band_class}",
                    style: "width: {bar_width}%",
                }
            }
            p { class: "bar-label", "{properties.percfull} percent full" }
            dl {
                div {
                    class: "stat",
                    dt { "Water in reservoir" }
                    dd { "{properties.resstorage} acre-feet" }
                }
                div {
                    class: "stat",
                    dt { "Reservoir capacity" }
                    dd { "{properties.conscap} acre-feet" }
                }
            }
        }
    }
}
