//! WFS 1.0.0 GetFeature request building.
//!
//! The dashboard issues the same query twice in different dress: once as an
//! XML POST body at startup (feeding the sidebar), and once as a GET URL
//! handed to the map's vector layer loader. Both come from one
//! [`GetFeatureRequest`] so the two stay in sync.

use crate::endpoints::RESERVOIR_LAYER;

const WFS_VERSION: &str = "1.0.0";
const DEFAULT_SRS: &str = "EPSG:4326";
const GEOJSON_FORMAT: &str = "application/json";

/// A WFS GetFeature query against a single feature type.
#[derive(Debug, Clone, PartialEq)]
pub struct GetFeatureRequest {
    /// Spatial reference system for returned geometries.
    pub srs_name: String,
    /// Fully qualified feature type, e.g. `waterApp:reservoirs`.
    pub type_name: String,
    /// Upper bound on returned features.
    pub max_features: u32,
    /// Requested output format.
    pub output_format: String,
}

impl GetFeatureRequest {
    /// GetFeature query for the reservoir layer with GeoJSON output.
    pub fn reservoirs(max_features: u32) -> Self {
        GetFeatureRequest {
            srs_name: DEFAULT_SRS.to_string(),
            type_name: RESERVOIR_LAYER.to_string(),
            max_features,
            output_format: GEOJSON_FORMAT.to_string(),
        }
    }

    /// OGC XML request body for a GetFeature POST.
    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                r#"<GetFeature xmlns="http://www.opengis.net/wfs" xmlns:ogc="http://www.opengis.net/ogc""#,
                r#" service="WFS" version="{version}" outputFormat="{format}" maxFeatures="{max}">"#,
                r#"<Query typeName="{type_name}" srsName="{srs}"/>"#,
                "</GetFeature>"
            ),
            version = WFS_VERSION,
            format = self.output_format,
            max = self.max_features,
            type_name = self.type_name,
            srs = self.srs_name,
        )
    }

    /// GET URL equivalent of the same query, for the vector layer loader.
    pub fn to_query_url(&self, ows_base: &str) -> String {
        format!(
            "{base}?service=WFS&version={version}&request=GetFeature&typeName={type_name}&maxFeatures={max}&outputFormat={format}",
            base = ows_base,
            version = WFS_VERSION,
            type_name = encode_param(&self.type_name),
            max = self.max_features,
            format = encode_param(&self.output_format),
        )
    }
}

/// Percent-encode the two reserved characters that appear in our parameter
/// values (the layer qualifier colon and the media-type slash).
fn encode_param(value: &str) -> String {
    value.replace(':', "%3A").replace('/', "%2F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_body_shape() {
        let xml = GetFeatureRequest::reservoirs(20).to_xml();
        assert!(xml.contains(r#"service="WFS""#));
        assert!(xml.contains(r#"version="1.0.0""#));
        assert!(xml.contains(r#"maxFeatures="20""#));
        assert!(xml.contains(r#"outputFormat="application/json""#));
        assert!(xml.contains(r#"<Query typeName="waterApp:reservoirs" srsName="EPSG:4326"/>"#));
    }

    #[test]
    fn test_query_url() {
        let url = GetFeatureRequest::reservoirs(50)
            .to_query_url("http://localhost:8080/geoserver/waterApp/ows");
        assert_eq!(
            url,
            "http://localhost:8080/geoserver/waterApp/ows?service=WFS&version=1.0.0\
             &request=GetFeature&typeName=waterApp%3Areservoirs&maxFeatures=50\
             &outputFormat=application%2Fjson"
        );
    }
}
