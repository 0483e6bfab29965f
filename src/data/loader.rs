use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Record};
use crate::error::LoadError;

/// Where the penguin measurements are published.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/mwaskom/seaborn-data/master/penguins.csv";

const REQUIRED_COLUMNS: [&str; 7] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "sex",
];

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// A remote URL or a local file holding the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, everything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::Path(PathBuf::from(location))
        }
    }

    fn is_json(&self) -> bool {
        let name = match self {
            DataSource::Url(url) => url.split(['?', '#']).next().unwrap_or(url),
            DataSource::Path(path) => path.to_str().unwrap_or(""),
        };
        name.to_ascii_lowercase().ends_with(".json")
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset once. Rows with any missing field are dropped.
///
/// Supported formats:
/// * CSV with a header row naming the seven record columns (default)
/// * `.json` – records-oriented array `[{ "species": ..., ... }, ...]`
pub fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    log::info!("Loading penguin data from {source}");

    let text = match source {
        DataSource::Url(url) => fetch_text(url)?,
        DataSource::Path(path) => read_text(path)?,
    };

    if source.is_json() {
        parse_json(&text)
    } else {
        parse_csv(text.as_bytes())
    }
}

fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };
    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(fetch_err)
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// One row as it appears in the source, before missing values are dropped.
/// Unparseable numbers (`NA`, `nan`, ...) count as missing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    species: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    island: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bill_depth_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    flipper_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    body_mass_g: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    sex: Option<String>,
}

impl RawRecord {
    fn complete(self) -> Option<Record> {
        Some(Record {
            species: present_text(self.species)?,
            island: present_text(self.island)?,
            bill_length_mm: present_number(self.bill_length_mm)?,
            bill_depth_mm: present_number(self.bill_depth_mm)?,
            flipper_length_mm: present_number(self.flipper_length_mm)?,
            body_mass_g: present_number(self.body_mass_g)?,
            sex: present_text(self.sex)?,
        })
    }
}

fn present_text(value: Option<String>) -> Option<String> {
    let value = value?.trim().to_string();
    match value.as_str() {
        "" | "NA" | "NaN" | "nan" | "null" => None,
        _ => Some(value),
    }
}

fn present_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn finish(rows: impl IntoIterator<Item = RawRecord>) -> Result<Dataset, LoadError> {
    let mut total = 0usize;
    let records: Vec<Record> = rows
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(RawRecord::complete)
        .collect();

    let dropped = total - records.len();
    if records.is_empty() {
        return Err(LoadError::NoCompleteRows { dropped });
    }

    log::info!(
        "Loaded {} complete rows ({dropped} with missing values dropped)",
        records.len()
    );
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse CSV text with a header row. Extra columns are ignored and header
/// names are matched after trimming surrounding whitespace.
pub fn parse_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let rows = reader
        .deserialize::<RawRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    finish(rows)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Parse a records-oriented JSON array.
pub fn parse_json(text: &str) -> Result<Dataset, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let JsonValue::Array(items) = root else {
        return Err(LoadError::NotAnArray);
    };

    let rows = items
        .into_iter()
        .map(serde_json::from_value::<RawRecord>)
        .collect::<Result<Vec<_>, _>>()?;
    finish(rows)
}
