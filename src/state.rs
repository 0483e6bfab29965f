use std::sync::Arc;

use crate::data::filter::{Choice, FilterSelection};
use crate::data::model::{Dataset, Parameter};
use crate::pipeline::{DashboardView, TablePage};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's UI state, independent of rendering.
///
/// Holds one current selection and the view computed from it. Each of the
/// three control events replaces the whole view at once.
pub struct AppState {
    /// Loaded dataset, shared read-only.
    pub dataset: Arc<Dataset>,

    /// Charts and table for the current selection.
    view: DashboardView,

    /// Zero-based table page.
    page: usize,

    /// Bumped on every interaction.
    generation: u64,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let view = DashboardView::compute(&dataset, &FilterSelection::default(), 0);
        Self {
            dataset,
            view,
            page: 0,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.view.selection
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// The table page currently shown.
    pub fn table_page(&self) -> TablePage<'_> {
        self.view.page(&self.dataset, self.page)
    }

    pub fn set_parameter(&mut self, parameter: Parameter) {
        let selection = FilterSelection {
            parameter,
            ..self.view.selection.clone()
        };
        self.apply(selection);
    }

    pub fn set_sex(&mut self, sex: Choice) {
        let selection = FilterSelection {
            sex,
            ..self.view.selection.clone()
        };
        self.apply(selection);
    }

    pub fn set_species(&mut self, species: Choice) {
        let selection = FilterSelection {
            species,
            ..self.view.selection.clone()
        };
        self.apply(selection);
    }

    /// Move the table to `page` (clamped to the available pages).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.view.page_count() - 1);
    }

    /// Recompute filter, aggregate, histogram and table for `selection`.
    fn apply(&mut self, selection: FilterSelection) {
        self.generation += 1;
        self.view = DashboardView::compute(&self.dataset, &selection, self.generation);
        self.page = 0;

        log::debug!(
            "generation {}: {} / sex={} / species={} -> {} rows",
            self.view.generation,
            selection.parameter,
            selection.sex,
            selection.species,
            self.view.rows.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    fn state() -> AppState {
        AppState::new(Arc::new(sample_dataset()))
    }

    #[test]
    fn starts_with_default_selection() {
        let s = state();
        assert_eq!(s.selection(), &FilterSelection::default());
        assert_eq!(s.view().rows.len(), 13);
        assert_eq!(s.view().generation, 0);
    }

    #[test]
    fn each_event_produces_a_new_generation() {
        let mut s = state();
        s.set_species("Gentoo".into());
        s.set_sex("FEMALE".into());
        s.set_parameter(Parameter::BillDepthMm);

        assert_eq!(s.view().generation, 3);
        assert_eq!(s.view().rows.len(), 2);
        assert_eq!(s.view().means.len(), 1);
        assert_eq!(s.view().means[0].island, "Biscoe");
    }

    #[test]
    fn parameter_change_keeps_rows() {
        let mut s = state();
        s.set_sex("MALE".into());
        let before = s.view().rows.clone();
        let means_before = s.view().means.clone();

        s.set_parameter(Parameter::FlipperLengthMm);
        assert_eq!(s.view().rows, before);
        assert_ne!(s.view().means, means_before);
        assert_eq!(s.view().distribution.parameter, Parameter::FlipperLengthMm);
    }

    #[test]
    fn filter_change_resets_table_page() {
        let mut s = state();
        s.set_page(1);
        assert_eq!(s.table_page().index, 1);

        s.set_species(Choice::All);
        assert_eq!(s.table_page().index, 0);
    }

    #[test]
    fn page_is_clamped() {
        let mut s = state();
        s.set_page(42);
        assert_eq!(s.table_page().index, 1);
        assert_eq!(s.table_page().rows.len(), 3);
    }

    #[test]
    fn empty_selection_is_not_an_error() {
        let mut s = state();
        s.set_species("Chinstrap".into());
        s.set_sex("MALE".into());
        assert_eq!(s.view().rows.len(), 0);
        assert!(s.view().means.is_empty());
        assert!(s.table_page().rows.is_empty());
    }
}
