use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::pipeline::{table_cells, TABLE_COLUMNS};
use crate::state::AppState;

/// Render the paginated table of filtered rows plus the pager.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtered data");

    let header_bg = color::to_color32(color::HEADER_COLOR, 1.0);
    let (index, count) = {
        let page = state.table_page();

        TableBuilder::new(ui)
            .id_salt("data_table")
            .striped(true)
            .columns(Column::auto().at_least(90.0), TABLE_COLUMNS.len())
            .header(24.0, |mut header| {
                for title in TABLE_COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(title)
                                .strong()
                                .color(Color32::WHITE)
                                .background_color(header_bg),
                        );
                    });
                }
            })
            .body(|mut body| {
                for record in &page.rows {
                    body.row(20.0, |mut row| {
                        for text in table_cells(record) {
                            row.col(|ui: &mut Ui| {
                                ui.label(text);
                            });
                        }
                    });
                }
            });

        if page.rows.is_empty() {
            ui.weak("No rows.");
        }
        (page.index, page.count)
    };

    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(index > 0, egui::Button::new("◀ Prev")).clicked() {
            state.set_page(index - 1);
        }
        ui.label(format!("Page {} of {}", index + 1, count));
        if ui
            .add_enabled(index + 1 < count, egui::Button::new("Next ▶"))
            .clicked()
        {
            state.set_page(index + 1);
        }
    });
}
