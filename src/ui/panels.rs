use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::data::filter::Choice;
use crate::data::model::Parameter;
use crate::state::AppState;

pub const TITLE: &str = "Penguin Analytics Dashboard";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the header with the row counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(
            RichText::new(TITLE)
                .strong()
                .color(color::to_color32(color::HEADER_COLOR, 1.0)),
        );
        ui.separator();
        ui.label(format!(
            "{} penguins loaded, {} match the filters",
            state.dataset.len(),
            state.view().rows.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Filter controls
// ---------------------------------------------------------------------------

/// Render the three dropdowns. A changed value is applied immediately, so
/// at most one event is processed per frame.
pub fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    let selection = state.selection().clone();
    let sex_options = Choice::options(state.dataset.sexes());
    let species_options = Choice::options(state.dataset.species());

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select parameter:");
        let mut parameter = selection.parameter;
        egui::ComboBox::from_id_salt("param_dropdown")
            .selected_text(parameter.label())
            .width(180.0)
            .show_ui(ui, |ui: &mut Ui| {
                for p in Parameter::ALL {
                    ui.selectable_value(&mut parameter, p, p.label());
                }
            });

        ui.add_space(16.0);
        ui.label("Select sex:");
        let mut sex = selection.sex.clone();
        choice_combo(ui, "sex_dropdown", &mut sex, &sex_options);

        ui.add_space(16.0);
        ui.label("Select species:");
        let mut species = selection.species.clone();
        choice_combo(ui, "species_dropdown", &mut species, &species_options);

        if parameter != selection.parameter {
            state.set_parameter(parameter);
        } else if sex != selection.sex {
            state.set_sex(sex);
        } else if species != selection.species {
            state.set_species(species);
        }
    });
}

fn choice_combo(ui: &mut Ui, id: &str, current: &mut Choice, options: &[Choice]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .width(140.0)
        .show_ui(ui, |ui: &mut Ui| {
            for opt in options {
                ui.selectable_value(current, opt.clone(), opt.to_string());
            }
        });
}
