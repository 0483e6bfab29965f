use thiserror::Error;

/// Failures while obtaining or parsing the dataset. All of them are fatal at
/// start-up.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("expected a top-level JSON array of records")]
    NotAnArray,

    #[error("data is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("no complete rows left after dropping {dropped} rows with missing values")]
    NoCompleteRows { dropped: usize },
}

/// A dashboard query that names something the dataset does not offer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("unknown {field} '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// A chart could not be drawn into its SVG buffer.
#[derive(Debug, Error)]
#[error("drawing the {chart} chart: {message}")]
pub struct ChartError {
    pub chart: &'static str,
    pub message: String,
}

/// Why the HTML dashboard page could not be produced.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
