//! SVG charts for the HTTP dashboard, drawn with plotters.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color;
use crate::error::ChartError;
use crate::pipeline::DashboardView;

pub const EMPTY_MESSAGE: &str = "No penguins match the current filters.";

const SIZE: (u32, u32) = (560, 360);
const FONT: &str = "sans-serif";

type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;

// ---------------------------------------------------------------------------
// Mean per island
// ---------------------------------------------------------------------------

/// Bars of the island means, ascending left to right. Island `i` is centred
/// on x = i so the mesh labels line up with the bars.
pub fn mean_chart_svg(view: &DashboardView) -> Result<String, ChartError> {
    render("mean", |root| {
        if view.means.is_empty() {
            return draw_empty(root);
        }

        let top = view.means.iter().map(|r| r.mean).fold(0.0, f64::max);
        let n = view.means.len() as f64;

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..n - 0.5, 0.0..top * 1.1)?;

        let island_label = |v: &f64| {
            let i = v.round();
            if (v - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            view.means
                .get(i as usize)
                .map(|r| r.island.clone())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(view.means.len())
            .x_label_formatter(&island_label)
            .x_desc("Island")
            .y_desc("Average value")
            .draw()?;

        chart.draw_series(view.means.iter().enumerate().map(|(i, row)| {
            let fill = color::to_rgb_color(color::island_color(&row.island));
            let x = i as f64;
            Rectangle::new([(x - 0.35, row.mean), (x + 0.35, 0.0)], fill.filled())
        }))?;
        chart.draw_series(view.means.iter().enumerate().map(|(i, row)| {
            let stroke = color::to_rgb_color(color::outline(color::island_color(&row.island)));
            let x = i as f64;
            Rectangle::new([(x - 0.35, row.mean), (x + 0.35, 0.0)], stroke.stroke_width(1))
        }))?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Density histogram
// ---------------------------------------------------------------------------

/// Overlaid per-island density histograms on the shared bin edges, with a
/// legend of island names.
pub fn distribution_chart_svg(view: &DashboardView) -> Result<String, ChartError> {
    let dist = &view.distribution;
    render("distribution", |root| {
        let (Some(&lo), Some(&hi)) = (dist.edges.first(), dist.edges.last()) else {
            return draw_empty(root);
        };
        if dist.is_empty() {
            return draw_empty(root);
        }

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(lo..hi, 0.0..dist.max_density() * 1.1)?;

        chart
            .configure_mesh()
            .x_desc(dist.parameter.label())
            .y_desc("Density")
            .draw()?;

        for series in &dist.series {
            let fill = color::to_rgb_color(color::island_color(&series.island))
                .mix(f64::from(color::HISTOGRAM_OPACITY));

            chart
                .draw_series(
                    series
                        .bins
                        .iter()
                        .filter(|b| b.density > 0.0)
                        .map(|b| Rectangle::new([(b.start, b.density), (b.end, 0.0)], fill.filled())),
                )?
                .label(series.island.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Shared drawing
// ---------------------------------------------------------------------------

/// Draw into a fresh SVG document and return its text.
fn render<F>(chart: &'static str, draw: F) -> Result<String, ChartError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE)
            .and_then(|()| draw(&root))
            .and_then(|()| root.present())
            .map_err(|e| ChartError {
                chart,
                message: e.to_string(),
            })?;
    }
    Ok(svg)
}

/// A blank chart with the empty-selection message in the middle.
fn draw_empty(root: &DrawingArea<SVGBackend<'_>, Shift>) -> DrawResult {
    let (w, h) = root.dim_in_pixel();
    let style = (FONT, 16)
        .into_font()
        .color(&color::to_rgb_color(color::DEFAULT_COLOR))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(EMPTY_MESSAGE, (w as i32 / 2, h as i32 / 2), style))
}
