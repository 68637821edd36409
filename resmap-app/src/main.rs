//! Reservoir map dashboard.
//!
//! Composes the OpenLayers map, the reservoir sidebar, the popup, and the
//! chart panel, and wires the two GeoServer fetches: the startup WFS
//! GetFeature POST that fills the sidebar, and the per-click WMS
//! GetFeatureInfo query that drives the popup.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use resmap_geo::endpoints::RESERVOIR_LAYER;
use resmap_geo::{
    parse_feature_collection, Endpoints, FeatureInfoRequest, GetFeatureRequest,
};
use resmap_ui::components::{ChartPanel, ErrorDisplay, LoadingSpinner, MapPopup, ReservoirList};
use resmap_ui::js_bridge::{self, MapConfig};
use resmap_ui::fetch;
use resmap_ui::state::{AppState, PopupInfo};

/// Initial view over the reservoir region, as (longitude, latitude).
const INITIAL_CENTER: [f64; 2] = [37.656133, 0.299586];
const INITIAL_ZOOM: f64 = 7.0;
const PROJECTION: &str = "EPSG:4326";

/// Feature cap for the sidebar's GetFeature POST.
const SIDEBAR_MAX_FEATURES: u32 = 20;
/// Feature cap for the map vector layer's own loader.
const LAYER_MAX_FEATURES: u32 = 50;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("resmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        let endpoints = Endpoints::default();

        // Build the map: basemap + reservoir vector layer + popup overlay.
        let config = MapConfig {
            target: "map".to_string(),
            popup_id: "popup".to_string(),
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            projection: PROJECTION.to_string(),
            vector_url: GetFeatureRequest::reservoirs(LAYER_MAX_FEATURES)
                .to_query_url(&endpoints.ows),
        };
        js_bridge::init_map(&config);

        // Popup flow: every click queries the WMS for the hit features.
        // The ticket counter drops responses arriving after a newer click.
        let ticket = Rc::new(Cell::new(0u64));
        let wms_base = endpoints.wms.clone();
        js_bridge::on_map_click(move |lon, lat, resolution| {
            let my_ticket = ticket.get() + 1;
            ticket.set(my_ticket);

            let url =
                FeatureInfoRequest::new(RESERVOIR_LAYER, (lon, lat), resolution).to_url(&wms_base);
            let ticket = ticket.clone();
            let mut popup = state.popup;
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch::get_text(&url)
                    .await
                    .and_then(|body| parse_feature_collection(&body));
                if ticket.get() != my_ticket {
                    return;
                }
                match result {
                    Ok(collection) => match PopupInfo::first_of(&collection.features) {
                        Some(info) => {
                            js_bridge::set_overlay_position(lon, lat);
                            popup.set(Some(info));
                        }
                        None => {
                            js_bridge::clear_overlay();
                            popup.set(None);
                        }
                    },
                    Err(err) => {
                        log::error!("feature info query failed: {err}");
                        js_bridge::clear_overlay();
                        popup.set(None);
                    }
                }
            });
        });

        // Startup fetch for the sidebar.
        spawn(async move {
            let request = GetFeatureRequest::reservoirs(SIDEBAR_MAX_FEATURES);
            match fetch::post_text(&endpoints.wfs, &request.to_xml())
                .await
                .and_then(|body| parse_feature_collection(&body))
            {
                Ok(collection) => {
                    log::info!("loaded {} reservoir features", collection.features.len());
                    state.features.set(collection.features);
                    state
                        .fetched_on
                        .set(Some(Utc::now().format("%Y-%m-%d").to_string()));
                    state.loading.set(false);
                }
                Err(err) => {
                    log::error!("reservoir feature fetch failed: {err}");
                    state
                        .error_msg
                        .set(Some("Reservoir data is currently unavailable".to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "map-pane",
                div { id: "map" }
                MapPopup {}
            }
            aside {
                class: "side-pane",
                h1 { "Reservoir levels" }
                if let Some(message) = (state.error_msg)() {
                    ErrorDisplay { message }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    ReservoirList {}
                }
                ChartPanel {}
            }
        }
    }
}
