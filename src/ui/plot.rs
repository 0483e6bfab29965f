use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color;
use crate::pipeline::DashboardView;

pub const MEAN_CHART_TITLE: &str = "Average value of selected parameter per island";
pub const DISTRIBUTION_CHART_TITLE: &str =
    "Distribution of the selected parameter (density histogram)";

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Mean per island
// ---------------------------------------------------------------------------

/// Bar chart of the island means, ascending left to right.
pub fn mean_chart(ui: &mut Ui, view: &DashboardView) {
    ui.vertical_centered(|ui: &mut Ui| ui.strong(MEAN_CHART_TITLE));
    if view.means.is_empty() {
        ui.weak("No penguins match the current filters.");
    }

    let bars: Vec<Bar> = view
        .means
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let c = color::island_color(&row.island);
            Bar::new(i as f64, row.mean)
                .name(&row.island)
                .fill(color::to_color32(c, 1.0))
                .stroke(Stroke::new(1.0, color::to_color32(color::outline(c), 1.0)))
                .width(0.7)
        })
        .collect();

    let islands: Vec<String> = view.means.iter().map(|r| r.island.clone()).collect();

    Plot::new("mean_param_chart")
        .height(CHART_HEIGHT)
        .x_axis_label("Island")
        .y_axis_label("Average value")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            islands.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Density histogram
// ---------------------------------------------------------------------------

/// Overlaid per-island density histograms.
pub fn distribution_chart(ui: &mut Ui, view: &DashboardView) {
    ui.vertical_centered(|ui: &mut Ui| ui.strong(DISTRIBUTION_CHART_TITLE));
    if view.distribution.is_empty() {
        ui.weak("No penguins match the current filters.");
    }

    Plot::new("param_distribution_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(view.distribution.parameter.label())
        .y_axis_label("Density")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &view.distribution.series {
                let c = color::island_color(&series.island);
                let fill = color::to_color32(c, color::HISTOGRAM_OPACITY);

                let bars: Vec<Bar> = series
                    .bins
                    .iter()
                    .filter(|b| b.density > 0.0)
                    .map(|b| {
                        Bar::new((b.start + b.end) / 2.0, b.density)
                            .width(b.end - b.start)
                            .fill(fill)
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).name(&series.island).color(fill));
            }
        });
}
