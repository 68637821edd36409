//! Figure computation for one reservoir's charts.

/// Capacity/storage numbers for a single reservoir, as selected from the
/// sidebar. All figures are in acre-feet.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageFigures {
    pub name: String,
    pub capacity: f64,
    pub storage: f64,
}

/// One named bar-chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub points: Vec<f64>,
}

impl StorageFigures {
    pub fn new(name: impl Into<String>, capacity: f64, storage: f64) -> Self {
        StorageFigures {
            name: name.into(),
            capacity,
            storage,
        }
    }

    /// Unfilled volume. Negative when storage exceeds the nominal capacity,
    /// which upstream data does produce after resurveys.
    pub fn empty_space(&self) -> f64 {
        self.capacity - self.storage
    }

    /// Pie slices as `(label, value)` pairs. Negative figures are clamped
    /// to zero-size slices; the slice stays listed so the legend is stable.
    pub fn pie_slices(&self) -> Vec<(String, f64)> {
        let empty_space = self.empty_space();
        if empty_space < 0.0 || self.storage < 0.0 {
            log::warn!(
                "{}: negative chart figure (capacity {}, storage {}), clamping to zero",
                self.name,
                self.capacity,
                self.storage
            );
        }
        vec![
            ("Empty Space".to_string(), empty_space.max(0.0)),
            ("Occupied".to_string(), self.storage.max(0.0)),
        ]
    }

    /// Category labels for the bar chart's x axis.
    pub fn bar_categories() -> [&'static str; 2] {
        ["Empty Space", "Occupied"]
    }

    /// Bar chart series. Each series carries a single point, so both bars
    /// land in the first category slot.
    // TODO: confirm whether both series should instead carry a value for
    // each category; today this mirrors the live dashboard's series layout.
    pub fn bar_series(&self) -> Vec<BarSeries> {
        vec![
            BarSeries {
                name: "Water quantity".to_string(),
                points: vec![self.empty_space()],
            },
            BarSeries {
                name: "Storage".to_string(),
                points: vec![self.storage],
            },
        ]
    }
}
