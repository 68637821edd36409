//! Chart rendering for the reservoir dashboard.
//!
//! This crate turns one reservoir's capacity/storage pair into the two
//! dashboard charts. The figures themselves are computed in plain Rust
//! ([`figures`]); rendering produces self-contained SVG strings suitable
//! for direct insertion into the page, so no canvas or JS charting library
//! is involved.

pub mod bar;
pub mod figures;
pub mod pie;

pub use bar::render_bar_svg;
pub use figures::{BarSeries, StorageFigures};
pub use pie::render_pie_svg;

use thiserror::Error;

/// Error type for chart rendering.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The plotters backend refused to draw.
    #[error("chart rendering failed: {0}")]
    Draw(String),
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
