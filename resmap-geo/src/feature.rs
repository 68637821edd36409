//! Typed model for the GeoJSON feature collections GeoServer returns.
//!
//! Both the startup WFS GetFeature response and the per-click WMS
//! GetFeatureInfo response are GeoJSON `FeatureCollection`s over the same
//! reservoir feature type, so one model covers both. Numeric properties
//! default to zero when a feature omits them; parsing only fails on a body
//! that is not a feature collection at all.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Attribute set published for each reservoir feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservoirProperties {
    /// Reservoir name.
    #[serde(default)]
    pub name: String,
    /// Currently stored volume in acre-feet (AF).
    #[serde(default)]
    pub resstorage: f64,
    /// Total constructed capacity in acre-feet (AF).
    #[serde(default)]
    pub conscap: f64,
    /// Stored volume as a percentage of capacity, nominally 0-100.
    #[serde(default)]
    pub percfull: f64,
}

/// Point geometry as it appears on the wire.
///
/// Coordinates follow the GeoJSON axis order: `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// One reservoir feature from a GeoServer response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservoirFeature {
    /// Upstream feature identifier, e.g. `reservoirs.3`.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    pub properties: ReservoirProperties,
}

impl ReservoirFeature {
    /// The feature's location as `(longitude, latitude)`, if it has a
    /// two-element point geometry.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let geometry = self.geometry.as_ref()?;
        match geometry.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }
}

/// Top-level GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<ReservoirFeature>,
}

/// Parse a GeoJSON response body into a feature collection.
///
/// An empty `features` array is a valid, non-error result.
pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "reservoirs.1",
                "geometry": { "type": "Point", "coordinates": [-118.5, 34.0] },
                "properties": { "name": "Lake A", "resstorage": 30, "conscap": 100, "percfull": 30 }
            },
            {
                "type": "Feature",
                "id": "reservoirs.2",
                "geometry": { "type": "Point", "coordinates": [37.1, 0.5] },
                "properties": { "name": "Lake B", "resstorage": 900, "conscap": 1200, "percfull": 75 }
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let collection = parse_feature_collection(SAMPLE).unwrap();
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.properties.name, "Lake A");
        assert_eq!(first.properties.resstorage, 30.0);
        assert_eq!(first.properties.conscap, 100.0);
        assert_eq!(first.properties.percfull, 30.0);
    }

    #[test]
    fn test_lon_lat_order() {
        let collection = parse_feature_collection(SAMPLE).unwrap();
        let (lon, lat) = collection.features[0].lon_lat().unwrap();
        assert_eq!(lon, -118.5);
        assert_eq!(lat, 34.0);
    }

    #[test]
    fn test_empty_collection_is_ok() {
        let collection =
            parse_feature_collection(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
                "properties": { "name": "Dry Gulch" }
            }]
        }"#;
        let collection = parse_feature_collection(body).unwrap();
        let properties = &collection.features[0].properties;
        assert_eq!(properties.resstorage, 0.0);
        assert_eq!(properties.conscap, 0.0);
        assert_eq!(properties.percfull, 0.0);
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = parse_feature_collection("<ServiceExceptionReport/>").unwrap_err();
        assert!(matches!(err, GeoError::Parse(_)));
    }

    #[test]
    fn test_degenerate_geometry_has_no_location() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [] },
                "properties": { "name": "Nowhere" }
            }]
        }"#;
        let collection = parse_feature_collection(body).unwrap();
        assert_eq!(collection.features[0].lon_lat(), None);
    }
}
