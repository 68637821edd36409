//! Pie chart rendering.

use plotters::element::Pie;
use plotters::prelude::*;

use crate::figures::StorageFigures;
use crate::{ChartError, Result};

const SIZE: (u32, u32) = (520, 420);
const CENTER: (i32, i32) = (260, 210);
const RADIUS: f64 = 150.0;

/// Slice colors: empty space in slate, occupied water in blue.
const SLICE_COLORS: [RGBColor; 2] = [RGBColor(96, 125, 139), RGBColor(33, 150, 243)];

/// Render the empty-space vs occupied pie for one reservoir as an SVG
/// document. A zero-total pie (both figures clamp to zero) renders a
/// placeholder message instead of slices.
pub fn render_pie_svg(figures: &StorageFigures) -> Result<String> {
    let slices = figures.pie_slices();
    let total: f64 = slices.iter().map(|(_, value)| value).sum();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        root.draw(&Text::new(
            figures.name.clone(),
            (10, 10),
            ("sans-serif", 20),
        ))
        .map_err(to_chart_error)?;

        if total > 0.0 {
            let sizes: Vec<f64> = slices.iter().map(|(_, value)| *value).collect();
            let labels: Vec<String> = slices.iter().map(|(label, _)| label.clone()).collect();
            let colors = SLICE_COLORS.to_vec();

            let mut pie = Pie::new(&CENTER, &RADIUS, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 16).into_font());
            pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
            root.draw(&pie).map_err(to_chart_error)?;
        } else {
            root.draw(&Text::new(
                "No storage data",
                (CENTER.0 - 60, CENTER.1),
                ("sans-serif", 18),
            ))
            .map_err(to_chart_error)?;
        }

        root.present().map_err(to_chart_error)?;
    }
    Ok(svg)
}

fn to_chart_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_svg_document() {
        let svg = render_pie_svg(&StorageFigures::new("Lake A", 100.0, 30.0)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Lake A"));
    }

    #[test]
    fn test_zero_total_renders_placeholder() {
        let svg = render_pie_svg(&StorageFigures::new("Dry Gulch", 0.0, 0.0)).unwrap();
        assert!(svg.contains("No storage data"));
    }

    #[test]
    fn test_overfull_reservoir_does_not_fail() {
        let svg = render_pie_svg(&StorageFigures::new("Lake B", 100.0, 120.0)).unwrap();
        assert!(svg.contains("<svg"));
    }
}
