//! GeoServer protocol plumbing and the reservoir feature model.
//!
//! This crate knows how to talk *about* the upstream GeoServer instance —
//! building WFS GetFeature requests, WMS GetFeatureInfo URLs, and parsing
//! the GeoJSON responses into typed structs — but performs no I/O itself.
//! The UI crate owns the actual fetches.

pub mod band;
pub mod endpoints;
pub mod error;
pub mod feature;
pub mod wfs;
pub mod wms;

pub use band::FillBand;
pub use endpoints::Endpoints;
pub use error::{GeoError, Result};
pub use feature::{parse_feature_collection, FeatureCollection, ReservoirFeature};
pub use wfs::GetFeatureRequest;
pub use wms::FeatureInfoRequest;
