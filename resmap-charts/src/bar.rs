//! Bar chart rendering.

use plotters::prelude::*;

use crate::figures::StorageFigures;
use crate::{ChartError, Result};

const SIZE: (u32, u32) = (520, 420);

/// Series colors, matching the pie's slice palette.
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(96, 125, 139), RGBColor(33, 150, 243)];

/// Horizontal placement of one grouped bar: series `series_index` for point
/// `point_index`, as an x-axis span inside the category slot.
fn bar_span(point_index: usize, series_index: usize) -> (f64, f64) {
    let left = point_index as f64 + 0.14 + series_index as f64 * 0.38;
    (left, left + 0.30)
}

/// Render the grouped bar chart for one reservoir as an SVG document.
/// Negative values draw below the axis line.
pub fn render_bar_svg(figures: &StorageFigures) -> Result<String> {
    let series = figures.bar_series();
    let categories = StorageFigures::bar_categories();

    let values: Vec<f64> = series.iter().flat_map(|s| s.points.iter().copied()).collect();
    let y_min = values.iter().copied().fold(0.0f64, f64::min) * 1.15;
    let y_max = values.iter().copied().fold(1.0f64, f64::max) * 1.15;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&figures.name, ("sans-serif", 20))
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..categories.len() as f64, y_min..y_max)
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(categories.len() * 2 + 1)
            .x_label_formatter(&|x| {
                // Label category centers (0.5, 1.5, ...), nothing else.
                let center = x - 0.5;
                if (center - center.round()).abs() < 1e-9 && center >= 0.0 {
                    categories
                        .get(center.round() as usize)
                        .map(|label| label.to_string())
                        .unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .y_desc("Acre-feet")
            .draw()
            .map_err(to_chart_error)?;

        for (series_index, one_series) in series.iter().enumerate() {
            let color = SERIES_COLORS[series_index % SERIES_COLORS.len()];
            chart
                .draw_series(one_series.points.iter().enumerate().map(
                    |(point_index, value)| {
                        let (left, right) = bar_span(point_index, series_index);
                        let (low, high) = (value.min(0.0), value.max(0.0));
                        Rectangle::new([(left, low), (right, high)], color.filled())
                    },
                ))
                .map_err(to_chart_error)?
                .label(one_series.name.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }
    Ok(svg)
}

fn to_chart_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}
