use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{Dataset, Parameter, Record};
use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Choice – one categorical dropdown value
// ---------------------------------------------------------------------------

/// Label of the catch-all dropdown entry.
pub const ALL: &str = "All";

/// A categorical filter: either everything, or exactly one observed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    /// "All" followed by the observed values, in dropdown order.
    pub fn options(observed: &[String]) -> Vec<Choice> {
        std::iter::once(Choice::All)
            .chain(observed.iter().cloned().map(Choice::Only))
            .collect()
    }

    fn check(&self, field: &'static str, observed: &[String]) -> Result<(), QueryError> {
        match self {
            Choice::Only(value) if !observed.contains(value) => Err(QueryError::UnknownOption {
                field,
                value: value.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl From<&str> for Choice {
    fn from(s: &str) -> Self {
        if s == ALL {
            Choice::All
        } else {
            Choice::Only(s.to_string())
        }
    }
}

impl From<String> for Choice {
    fn from(s: String) -> Self {
        if s == ALL {
            Choice::All
        } else {
            Choice::Only(s)
        }
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::All => ALL.to_string(),
            Choice::Only(value) => value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(value) => f.write_str(value),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – the current state of the three dropdowns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub parameter: Parameter,
    pub sex: Choice,
    pub species: Choice,
}

impl FilterSelection {
    /// Whether a record passes the sex and species predicates.
    pub fn accepts(&self, record: &Record) -> bool {
        self.sex.matches(&record.sex) && self.species.matches(&record.species)
    }

    /// Reject values that the dataset never offers as dropdown options.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), QueryError> {
        self.sex.check("sex", dataset.sexes())?;
        self.species.check("species", dataset.species())
    }
}

// ---------------------------------------------------------------------------
// FilteredView – indices of records passing the selection
// ---------------------------------------------------------------------------

/// Positions (in dataset order) of the records that pass a selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// The retained records, borrowed from `dataset`.
    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.indices.iter().map(move |&i| &dataset.records()[i])
    }
}

/// Return the records matching the sex and species choices. An empty
/// result is a valid view.
pub fn filter_records(dataset: &Dataset, selection: &FilterSelection) -> FilteredView {
    let indices = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.accepts(r))
        .map(|(i, _)| i)
        .collect();
    FilteredView { indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;
    use proptest::prelude::*;

    impl FilteredView {
        /// Narrow this view further by `selection`.
        fn refine(&self, dataset: &Dataset, selection: &FilterSelection) -> FilteredView {
            let indices = self
                .indices
                .iter()
                .copied()
                .filter(|&i| selection.accepts(&dataset.records()[i]))
                .collect();
            FilteredView { indices }
        }
    }

    fn selection(sex: &str, species: &str) -> FilterSelection {
        FilterSelection {
            parameter: Parameter::BodyMassG,
            sex: sex.into(),
            species: species.into(),
        }
    }

    #[test]
    fn all_all_keeps_every_record() {
        let ds = sample_dataset();
        let view = filter_records(&ds, &FilterSelection::default());
        assert_eq!(view.len(), ds.len());
    }

    #[test]
    fn species_filter_keeps_only_that_species() {
        let ds = sample_dataset();
        let view = filter_records(&ds, &selection("All", "Gentoo"));
        assert_eq!(view.len(), 4);
        assert!(view.records(&ds).all(|r| r.species == "Gentoo"));
    }

    #[test]
    fn combined_filter_can_match_nothing() {
        let ds = sample_dataset();
        let view = filter_records(&ds, &selection("MALE", "Chinstrap"));
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn choice_round_trips_through_strings() {
        assert_eq!(Choice::from("All"), Choice::All);
        assert_eq!(String::from(Choice::from("FEMALE")), "FEMALE");
        let json = serde_json::to_string(&selection("All", "Adelie")).unwrap();
        assert_eq!(
            json,
            r#"{"parameter":"body_mass_g","sex":"All","species":"Adelie"}"#
        );
    }

    #[test]
    fn options_start_with_all() {
        let ds = sample_dataset();
        let opts = Choice::options(ds.sexes());
        assert_eq!(opts[0], Choice::All);
        assert_eq!(opts.len(), 3);
    }

    #[test]
    fn validate_rejects_unobserved_values() {
        let ds = sample_dataset();
        assert!(selection("FEMALE", "Adelie").validate(&ds).is_ok());
        assert_eq!(
            selection("All", "Emperor").validate(&ds),
            Err(QueryError::UnknownOption {
                field: "species",
                value: "Emperor".into()
            })
        );
    }

    fn arb_selection() -> impl Strategy<Value = FilterSelection> {
        let sex = prop_oneof![Just("All"), Just("MALE"), Just("FEMALE"), Just("UNKNOWN")];
        let species = prop_oneof![
            Just("All"),
            Just("Adelie"),
            Just("Chinstrap"),
            Just("Gentoo")
        ];
        (0usize..4, sex, species).prop_map(|(p, sex, species)| FilterSelection {
            parameter: Parameter::ALL[p],
            sex: sex.into(),
            species: species.into(),
        })
    }

    proptest! {
        /// Every retained record satisfies the predicate and every dropped one fails it.
        #[test]
        fn prop_view_is_exact_subset(sel in arb_selection()) {
            let ds = sample_dataset();
            let view = filter_records(&ds, &sel);
            prop_assert!(view.len() <= ds.len());
            for (i, r) in ds.records().iter().enumerate() {
                let kept = view.indices.contains(&i);
                let expected = (sel.sex == Choice::All || sel.sex == Choice::Only(r.sex.clone()))
                    && (sel.species == Choice::All || sel.species == Choice::Only(r.species.clone()));
                prop_assert_eq!(kept, expected);
            }
        }

        #[test]
        fn prop_filtering_is_idempotent(sel in arb_selection()) {
            let ds = sample_dataset();
            let once = filter_records(&ds, &sel);
            let twice = once.refine(&ds, &sel);
            prop_assert_eq!(once, twice);
        }

        /// The parameter never changes which rows are kept.
        #[test]
        fn prop_parameter_does_not_affect_rows(sel in arb_selection(), p in 0usize..4) {
            let ds = sample_dataset();
            let other = FilterSelection { parameter: Parameter::ALL[p], ..sel.clone() };
            prop_assert_eq!(filter_records(&ds, &sel), filter_records(&ds, &other));
        }
    }
}
