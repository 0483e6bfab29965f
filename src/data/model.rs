use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Parameter – the numeric field selected for aggregation / binning
// ---------------------------------------------------------------------------

/// One of the four numeric measurements a user can chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    #[default]
    BodyMassG,
    FlipperLengthMm,
    BillLengthMm,
    BillDepthMm,
}

impl Parameter {
    /// Dropdown order.
    pub const ALL: [Parameter; 4] = [
        Parameter::BodyMassG,
        Parameter::FlipperLengthMm,
        Parameter::BillLengthMm,
        Parameter::BillDepthMm,
    ];

    /// Column name in the source data.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::BodyMassG => "body_mass_g",
            Parameter::FlipperLengthMm => "flipper_length_mm",
            Parameter::BillLengthMm => "bill_length_mm",
            Parameter::BillDepthMm => "bill_depth_mm",
        }
    }

    /// Human-readable label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::BodyMassG => "Body mass (g)",
            Parameter::FlipperLengthMm => "Flipper length (mm)",
            Parameter::BillLengthMm => "Bill length (mm)",
            Parameter::BillDepthMm => "Bill depth (mm)",
        }
    }

    /// Read this measurement from a record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Parameter::BodyMassG => record.body_mass_g,
            Parameter::FlipperLengthMm => record.flipper_length_mm,
            Parameter::BillLengthMm => record.bill_length_mm,
            Parameter::BillDepthMm => record.bill_depth_mm,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| QueryError::UnknownParameter(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Record – one complete penguin observation
// ---------------------------------------------------------------------------

/// A single penguin observation. Every field is present; incomplete rows
/// never make it past the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub species: String,
    pub island: String,
    pub bill_length_mm: f64,
    pub bill_depth_mm: f64,
    pub flipper_length_mm: f64,
    pub body_mass_g: f64,
    pub sex: String,
}

// ---------------------------------------------------------------------------
// Dataset – the immutable loaded record set
// ---------------------------------------------------------------------------

/// All loaded records plus the distinct categorical values used to populate
/// the filter controls.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    species: Vec<String>,
    islands: Vec<String>,
    sexes: Vec<String>,
}

impl Dataset {
    /// Build the dataset and its distinct-value lists (first-seen order).
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut species = Vec::new();
        let mut islands = Vec::new();
        let mut sexes = Vec::new();

        for r in &records {
            push_distinct(&mut species, &r.species);
            push_distinct(&mut islands, &r.island);
            push_distinct(&mut sexes, &r.sex);
        }

        Dataset {
            records,
            species,
            islands,
            sexes,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn islands(&self) -> &[String] {
        &self.islands
    }

    pub fn sexes(&self) -> &[String] {
        &self.sexes
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    #[test]
    fn parameter_parses_from_column_name() {
        for p in Parameter::ALL {
            assert_eq!(p.key().parse::<Parameter>().unwrap(), p);
        }
        assert!("beak_colour".parse::<Parameter>().is_err());
    }

    #[test]
    fn parameter_reads_matching_field() {
        let ds = sample_dataset();
        let r = &ds.records()[0];
        assert_eq!(Parameter::BodyMassG.value(r), r.body_mass_g);
        assert_eq!(Parameter::BillDepthMm.value(r), r.bill_depth_mm);
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let ds = sample_dataset();
        assert_eq!(ds.species(), ["Adelie", "Chinstrap", "Gentoo"]);
        assert_eq!(ds.islands(), ["Torgersen", "Biscoe", "Dream"]);
        assert_eq!(ds.sexes(), ["MALE", "FEMALE"]);
    }
}
