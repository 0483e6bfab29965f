//! Selection → filtered rows → {island means, density histogram, table page}.
//!
//! Every output of one [`DashboardView`] is derived from the same
//! [`FilteredView`], so the charts and the table can never disagree.

use serde::Serialize;

use crate::data::aggregate::{island_means, AggregateRow};
use crate::data::filter::{filter_records, FilterSelection, FilteredView};
use crate::data::histogram::{density_histogram, Distribution, HISTOGRAM_BINS};
use crate::data::model::{Dataset, Record};

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Everything the three presentation widgets need for one selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Interaction counter this view was computed for.
    pub generation: u64,
    pub selection: FilterSelection,
    pub rows: FilteredView,
    pub means: Vec<AggregateRow>,
    pub distribution: Distribution,
}

impl DashboardView {
    pub fn compute(dataset: &Dataset, selection: &FilterSelection, generation: u64) -> Self {
        let rows = filter_records(dataset, selection);
        let means = island_means(rows.records(dataset), selection.parameter);
        let distribution =
            density_histogram(rows.records(dataset), selection.parameter, HISTOGRAM_BINS);

        DashboardView {
            generation,
            selection: selection.clone(),
            rows,
            means,
            distribution,
        }
    }

    /// Number of table pages; an empty view still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Slice the filtered rows for table page `index` (clamped to the last page).
    pub fn page<'a>(&'a self, dataset: &'a Dataset, index: usize) -> TablePage<'a> {
        let count = self.page_count();
        let index = index.min(count - 1);
        let rows = self
            .rows
            .records(dataset)
            .skip(index * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        TablePage {
            index,
            count,
            total_rows: self.rows.len(),
            rows,
        }
    }
}

/// Table column headers, in display order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "Species",
    "Island",
    "Bill length (mm)",
    "Bill depth (mm)",
    "Flipper length (mm)",
    "Body mass (g)",
    "Sex",
];

/// Cell text for one record, matching [`TABLE_COLUMNS`].
pub fn table_cells(r: &Record) -> [String; 7] {
    [
        r.species.clone(),
        r.island.clone(),
        r.bill_length_mm.to_string(),
        r.bill_depth_mm.to_string(),
        r.flipper_length_mm.to_string(),
        r.body_mass_g.to_string(),
        r.sex.clone(),
    ]
}

/// One page of the data table.
#[derive(Debug, Clone, Serialize)]
pub struct TablePage<'a> {
    /// Zero-based page index.
    pub index: usize,
    pub count: usize,
    pub total_rows: usize,
    pub rows: Vec<&'a Record>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;
    use crate::data::model::Parameter;

    #[test]
    fn cells_follow_column_order() {
        let ds = sample_dataset();
        let c = table_cells(&ds.records()[0]);
        assert_eq!(c.len(), TABLE_COLUMNS.len());
        assert_eq!(c[0], "Adelie");
        assert_eq!(c[1], "Torgersen");
        assert_eq!(c[2], "39.1");
        assert_eq!(c[5], "3750");
        assert_eq!(c[6], "MALE");
    }

    #[test]
    fn default_selection_covers_whole_dataset() {
        let ds = sample_dataset();
        let view = DashboardView::compute(&ds, &FilterSelection::default(), 0);
        assert_eq!(view.rows.len(), 13);
        assert_eq!(view.means.len(), 3);
        assert_eq!(view.distribution.series.len(), 3);
        assert_eq!(view.page_count(), 2);
    }

    #[test]
    fn pages_split_rows_and_clamp() {
        let ds = sample_dataset();
        let view = DashboardView::compute(&ds, &FilterSelection::default(), 0);

        let first = view.page(&ds, 0);
        assert_eq!(first.rows.len(), PAGE_SIZE);
        assert_eq!(first.rows[0], &ds.records()[0]);

        let last = view.page(&ds, 99);
        assert_eq!(last.index, 1);
        assert_eq!(last.rows.len(), 3);
    }

    #[test]
    fn zero_match_selection_yields_empty_outputs() {
        let ds = sample_dataset();
        let sel = FilterSelection {
            parameter: Parameter::BillLengthMm,
            sex: "MALE".into(),
            species: "Chinstrap".into(),
        };
        let view = DashboardView::compute(&ds, &sel, 7);

        assert_eq!(view.rows.len(), 0);
        assert!(view.means.is_empty());
        assert!(view.distribution.is_empty());
        let page = view.page(&ds, 0);
        assert_eq!((page.index, page.count, page.rows.len()), (0, 1, 0));
    }

    #[test]
    fn outputs_share_one_filtered_view() {
        let ds = sample_dataset();
        let sel = FilterSelection {
            sex: "FEMALE".into(),
            ..FilterSelection::default()
        };
        let view = DashboardView::compute(&ds, &sel, 3);

        let histogram_rows: usize = view.distribution.series.iter().map(|s| s.count).sum();
        assert_eq!(histogram_rows, view.rows.len());
        assert_eq!(view.page(&ds, 0).total_rows, view.rows.len());
        assert_eq!(view.generation, 3);
    }
}
