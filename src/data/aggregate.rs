use serde::Serialize;

use super::model::{Parameter, Record};

/// Mean of the selected parameter for one island.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub island: String,
    pub mean: f64,
}

/// Group records by island and average `parameter` per group.
///
/// Rows come back sorted ascending by mean (ties broken by island name). No
/// records means no rows.
pub fn island_means<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    parameter: Parameter,
) -> Vec<AggregateRow> {
    // (island, sum, count) in first-seen order; there are only a handful of islands.
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();

    for r in records {
        let value = parameter.value(r);
        match groups.iter_mut().find(|(island, _, _)| *island == r.island) {
            Some((_, sum, count)) => {
                *sum += value;
                *count += 1;
            }
            None => groups.push((r.island.as_str(), value, 1)),
        }
    }

    let mut rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|(island, sum, count)| AggregateRow {
            island: island.to_string(),
            mean: sum / count as f64,
        })
        .collect();

    rows.sort_by(|a, b| a.mean.total_cmp(&b.mean).then_with(|| a.island.cmp(&b.island)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_records, FilterSelection};
    use crate::data::fixtures::sample_dataset;
    use proptest::prelude::*;

    #[test]
    fn body_mass_means_cover_all_islands_sorted() {
        let ds = sample_dataset();
        let rows = island_means(ds.records(), Parameter::BodyMassG);

        let islands: Vec<&str> = rows.iter().map(|r| r.island.as_str()).collect();
        assert_eq!(islands, ["Dream", "Torgersen", "Biscoe"]);
        assert!((rows[0].mean - 3625.0).abs() < 1e-9);
        assert!((rows[1].mean - 3775.0).abs() < 1e-9);
        assert!((rows[2].mean - 27350.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn gentoo_only_yields_single_biscoe_row() {
        let ds = sample_dataset();
        let sel = FilterSelection {
            species: "Gentoo".into(),
            ..FilterSelection::default()
        };
        let view = filter_records(&ds, &sel);
        let rows = island_means(view.records(&ds), sel.parameter);
        assert_eq!(
            rows,
            vec![AggregateRow {
                island: "Biscoe".into(),
                mean: 5087.5
            }]
        );
    }

    #[test]
    fn empty_input_gives_no_rows() {
        let rows = island_means(std::iter::empty(), Parameter::BillDepthMm);
        assert!(rows.is_empty());
    }

    proptest! {
        #[test]
        fn prop_rows_bounded_sorted_and_positive(mask in prop::collection::vec(any::<bool>(), 13), p in 0usize..4) {
            let ds = sample_dataset();
            let picked: Vec<&Record> = ds
                .records()
                .iter()
                .zip(mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(r, _)| r)
                .collect();

            let mut islands: Vec<&str> = picked.iter().map(|r| r.island.as_str()).collect();
            islands.sort_unstable();
            islands.dedup();

            let rows = island_means(picked.iter().copied(), Parameter::ALL[p]);
            prop_assert_eq!(rows.len(), islands.len());
            prop_assert!(rows.windows(2).all(|w| w[0].mean <= w[1].mean));
            prop_assert!(rows.iter().all(|r| r.mean > 0.0));
        }
    }
}
