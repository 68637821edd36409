//! Fixed locations of the upstream GeoServer services.

/// GeoServer workspace that publishes the reservoir data.
pub const WORKSPACE: &str = "waterApp";

/// Fully qualified reservoir layer name.
pub const RESERVOIR_LAYER: &str = "waterApp:reservoirs";

/// Base URLs for the three GeoServer service endpoints the dashboard uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    /// WFS endpoint, used for the startup GetFeature POST.
    pub wfs: String,
    /// WMS endpoint, used for GetFeatureInfo queries and the tile layer.
    pub wms: String,
    /// OWS endpoint, used for the vector layer's GetFeature GET URL.
    pub ows: String,
}

impl Endpoints {
    /// Endpoints on an arbitrary host, e.g. `"geo.example.org:8080"`.
    pub fn for_host(host: &str) -> Self {
        Endpoints {
            wfs: format!("http://{host}/geoserver/{WORKSPACE}/wfs"),
            wms: format!("http://{host}/geoserver/{WORKSPACE}/wms"),
            ows: format!("http://{host}/geoserver/{WORKSPACE}/ows"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::for_host("localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_geoserver() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.wfs, "http://localhost:8080/geoserver/waterApp/wfs");
        assert_eq!(endpoints.wms, "http://localhost:8080/geoserver/waterApp/wms");
        assert_eq!(endpoints.ows, "http://localhost:8080/geoserver/waterApp/ows");
    }

    #[test]
    fn test_for_host() {
        let endpoints = Endpoints::for_host("geo.example.org");
        assert_eq!(endpoints.wms, "http://geo.example.org/geoserver/waterApp/wms");
    }
}
