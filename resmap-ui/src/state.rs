//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the dashboard's reactive signals into one struct
//! provided via `use_context_provider`. Components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use resmap_charts::StorageFigures;
use resmap_geo::ReservoirFeature;

/// Attributes shown in the map popup for one identified reservoir.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupInfo {
    pub name: String,
    /// Stored volume in acre-feet.
    pub storage: f64,
    /// Total capacity in acre-feet.
    pub capacity: f64,
}

impl PopupInfo {
    pub fn from_feature(feature: &ReservoirFeature) -> Self {
        PopupInfo {
            name: feature.properties.name.clone(),
            storage: feature.properties.resstorage,
            capacity: feature.properties.conscap,
        }
    }

    /// Popup for a feature-info result: the first feature wins even when
    /// several overlap; zero features mean no popup.
    pub fn first_of(features: &[ReservoirFeature]) -> Option<Self> {
        features.first().map(Self::from_feature)
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the startup feature fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the startup fetch failed
    pub error_msg: Signal<Option<String>>,
    /// Reservoir features fetched at startup, in upstream order
    pub features: Signal<Vec<ReservoirFeature>>,
    /// Day the feature list was fetched, for the sidebar cards
    pub fetched_on: Signal<Option<String>>,
    /// Popup payload; `None` means the popup is hidden
    pub popup: Signal<Option<PopupInfo>>,
    /// Reservoir currently charted; `None` means the chart panel is empty
    pub selected_figures: Signal<Option<StorageFigures>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        AppState {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            features: Signal::new(Vec::new()),
            fetched_on: Signal::new(None),
            popup: Signal::new(None),
            selected_figures: Signal::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resmap_geo::feature::{PointGeometry, ReservoirProperties};

    fn feature(name: &str, storage: f64, capacity: f64) -> ReservoirFeature {
        ReservoirFeature {
            id: None,
            geometry: Some(PointGeometry {
                kind: "Point".to_string(),
                coordinates: vec![37.0, 0.3],
            }),
            properties: ReservoirProperties {
                name: name.to_string(),
                resstorage: storage,
                conscap: capacity,
                percfull: 0.0,
            },
        }
    }

    #[test]
    fn test_first_feature_wins() {
        let features = vec![feature("Lake A", 30.0, 100.0), feature("Lake B", 5.0, 10.0)];
        let info = PopupInfo::first_of(&features).unwrap();
        assert_eq!(info.name, "Lake A");
        assert_eq!(info.storage, 30.0);
        assert_eq!(info.capacity, 100.0);
    }

    #[test]
    fn test_no_features_means_no_popup() {
        assert_eq!(PopupInfo::first_of(&[]), None);
    }
}
