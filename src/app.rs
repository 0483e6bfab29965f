use std::sync::Arc;

use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and filters ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
            ui.separator();
            panels::filter_bar(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Central panel: charts side by side, table below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.columns(2, |cols| {
                        plot::mean_chart(&mut cols[0], self.state.view());
                        plot::distribution_chart(&mut cols[1], self.state.view());
                    });
                    ui.separator();
                    table::data_table(ui, &mut self.state);
                });
        });
    }
}

/// Open the native dashboard window.
pub fn run(dataset: Arc<Dataset>) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        panels::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
}
