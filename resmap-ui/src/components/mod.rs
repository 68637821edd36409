//! Reusable Dioxus RSX components for the reservoir dashboard.

mod chart_panel;
mod error_display;
mod loading_spinner;
mod popup;
mod sidebar;

pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use popup::MapPopup;
pub use sidebar::{ReservoirCard, ReservoirList};
