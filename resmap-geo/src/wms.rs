//! WMS GetFeatureInfo URL building.
//!
//! A map click gives a coordinate and the view's current resolution; the
//! query asks the WMS for attribute data at that point. The request frames
//! the click in a small square box of map units sized to whole pixels and
//! queries the box's center pixel, so the hit tolerance scales with zoom
//! level the same way the rendered markers do.

/// Side length in pixels of the query box around the click. Odd, so the
/// clicked coordinate lands exactly on the center pixel.
pub const QUERY_BOX_PIXELS: u32 = 101;

const WMS_VERSION: &str = "1.1.1";
const DEFAULT_SRS: &str = "EPSG:4326";
const GEOJSON_INFO_FORMAT: &str = "application/json";
const DEFAULT_FEATURE_COUNT: u32 = 10;

/// A WMS GetFeatureInfo query for one clicked map location.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureInfoRequest {
    /// Layer to identify features on (also sent as `QUERY_LAYERS`).
    pub layer: String,
    /// Clicked location as `(longitude, latitude)`.
    pub coordinate: (f64, f64),
    /// View resolution in map units per pixel at click time.
    pub resolution: f64,
    /// Spatial reference system of `coordinate` and the bbox.
    pub srs: String,
    /// Requested info format.
    pub info_format: String,
    /// Upper bound on identified features.
    pub feature_count: u32,
}

impl FeatureInfoRequest {
    pub fn new(layer: &str, coordinate: (f64, f64), resolution: f64) -> Self {
        FeatureInfoRequest {
            layer: layer.to_string(),
            coordinate,
            resolution,
            srs: DEFAULT_SRS.to_string(),
            info_format: GEOJSON_INFO_FORMAT.to_string(),
            feature_count: DEFAULT_FEATURE_COUNT,
        }
    }

    /// Bounding box of the query window as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        let half = self.resolution * f64::from(QUERY_BOX_PIXELS) / 2.0;
        let (lon, lat) = self.coordinate;
        (lon - half, lat - half, lon + half, lat + half)
    }

    /// Full GetFeatureInfo URL against the given WMS base endpoint.
    pub fn to_url(&self, wms_base: &str) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.bbox();
        let center = QUERY_BOX_PIXELS / 2;
        format!(
            "{base}?SERVICE=WMS&VERSION={version}&REQUEST=GetFeatureInfo\
             &LAYERS={layer}&QUERY_LAYERS={layer}&STYLES=\
             &SRS={srs}&BBOX={min_lon},{min_lat},{max_lon},{max_lat}\
             &WIDTH={size}&HEIGHT={size}&X={center}&Y={center}\
             &INFO_FORMAT={format}&FEATURE_COUNT={count}",
            base = wms_base,
            version = WMS_VERSION,
            layer = encode_param(&self.layer),
            srs = encode_param(&self.srs),
            size = QUERY_BOX_PIXELS,
            center = center,
            format = encode_param(&self.info_format),
            count = self.feature_count,
        )
    }
}

fn encode_param(value: &str) -> String {
    value.replace(':', "%3A").replace('/', "%2F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_centered_on_click() {
        let request = FeatureInfoRequest::new("waterApp:reservoirs", (37.5, 0.25), 0.01);
        let (min_lon, min_lat, max_lon, max_lat) = request.bbox();
        let half = 0.01 * 101.0 / 2.0;
        assert!((min_lon - (37.5 - half)).abs() < 1e-12);
        assert!((max_lon - (37.5 + half)).abs() < 1e-12);
        assert!((min_lat - (0.25 - half)).abs() < 1e-12);
        assert!((max_lat - (0.25 + half)).abs() < 1e-12);
        assert!((max_lon - min_lon - 101.0 * 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_url_parameters() {
        let url = FeatureInfoRequest::new("waterApp:reservoirs", (37.5, 0.25), 0.01)
            .to_url("http://localhost:8080/geoserver/waterApp/wms");
        assert!(url.starts_with("http://localhost:8080/geoserver/waterApp/wms?SERVICE=WMS"));
        assert!(url.contains("REQUEST=GetFeatureInfo"));
        assert!(url.contains("LAYERS=waterApp%3Areservoirs"));
        assert!(url.contains("QUERY_LAYERS=waterApp%3Areservoirs"));
        assert!(url.contains("SRS=EPSG%3A4326"));
        assert!(url.contains("WIDTH=101&HEIGHT=101&X=50&Y=50"));
        assert!(url.contains("INFO_FORMAT=application%2Fjson"));
        assert!(url.contains("FEATURE_COUNT=10"));
    }

    #[test]
    fn test_query_pixel_is_box_center() {
        // 101 px wide, zero-indexed pixel 50 is the middle column/row.
        assert_eq!(QUERY_BOX_PIXELS / 2, 50);
    }
}
