//! Typed wrappers around the OpenLayers globals defined in `assets/js/map.js`.
//!
//! The map script is embedded at compile time and evaluated once as plain
//! globals (no ES modules). OpenLayers itself arrives via a CDN `<script>`
//! tag in the host page, so map construction polls until the `ol` global
//! and the target element both exist. Map clicks call back into Rust
//! through a closure registered on `window`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed the map wiring script at compile time
static MAP_JS: &str = include_str!("../assets/js/map.js");

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window"], js_name = resmapAnimateCenter)]
    fn js_animate_center(lon: f64, lat: f64, duration: f64, done: &js_sys::Function);

    #[wasm_bindgen(js_namespace = ["window"], js_name = resmapAnimateZoom)]
    fn js_animate_zoom(zoom_out: f64, zoom_target: f64, leg_duration: f64, done: &js_sys::Function);
}

/// Everything `resmapInitMap` needs to build the map, serialized to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MapConfig {
    /// DOM id of the map container.
    pub target: String,
    /// DOM id of the popup element the overlay anchors.
    pub popup_id: String,
    /// Initial view center as `[longitude, latitude]`.
    pub center: [f64; 2],
    pub zoom: f64,
    pub projection: String,
    /// GET URL the vector layer loads its GeoJSON features from.
    pub vector_url: String,
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('resmap JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the map script and build the map once OpenLayers has loaded
/// and the target element exists. Call once at app startup.
pub fn init_map(config: &MapConfig) {
    let _ = js_sys::eval(MAP_JS);

    // Stash the serialized config on window for the polling callback.
    let config_json = serde_json::to_string(config).unwrap_or_default();
    let store_js = format!(
        "window.__resmapConfig = {};",
        serde_json::to_string(&config_json).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            var waitForOl = setInterval(function() {{
                if (typeof ol !== 'undefined' && document.getElementById('{target}')) {{
                    clearInterval(waitForOl);
                    try {{
                        resmapInitMap(window.__resmapConfig);
                        delete window.__resmapConfig;
                    }} catch(e) {{ console.error('resmap map init failed:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        target = config.target
    ));
}

/// Register the handler invoked on every map single-click with the clicked
/// `(longitude, latitude)` and the view resolution at click time.
pub fn on_map_click(handler: impl FnMut(f64, f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64, f64)>::new(handler);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__resmapOnMapClick"),
            closure.as_ref(),
        );
    }
    // The handler lives for the whole page session.
    closure.forget();
}

/// Anchor the popup overlay at `(longitude, latitude)`.
pub fn set_overlay_position(lon: f64, lat: f64) {
    call_js(&format!("resmapSetOverlayPosition({lon}, {lat});"));
}

/// Hide the popup overlay.
pub fn clear_overlay() {
    call_js("resmapClearOverlay();");
}

/// Current view zoom level, or 0 before the map exists.
pub fn view_zoom() -> f64 {
    js_sys::eval("typeof resmapViewZoom !== 'undefined' ? resmapViewZoom() : 0")
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Start the pan phase of a camera flight.
pub fn animate_center(lon: f64, lat: f64, duration_ms: f64, done: &Closure<dyn FnMut(bool)>) {
    js_animate_center(lon, lat, duration_ms, done.as_ref().unchecked_ref());
}

/// Start the two-leg zoom phase of a camera flight.
pub fn animate_zoom(
    zoom_out: f64,
    zoom_target: f64,
    leg_duration_ms: f64,
    done: &Closure<dyn FnMut(bool)>,
) {
    js_animate_zoom(zoom_out, zoom_target, leg_duration_ms, done.as_ref().unchecked_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_serializes_lon_lat_pair() {
        let config = MapConfig {
            target: "map".to_string(),
            popup_id: "popup".to_string(),
            center: [37.656133, 0.299586],
            zoom: 7.0,
            projection: "EPSG:4326".to_string(),
            vector_url: "http://localhost:8080/geoserver/waterApp/ows?service=WFS".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""center":[37.656133,0.299586]"#));
        assert!(json.contains(r#""projection":"EPSG:4326""#));
    }
}
