/// Data layer: records, loading, filtering and the two derived views.
///
/// Architecture:
/// ```text
///   penguins.csv (URL or file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse, drop rows with missing values → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  sex / species predicates → FilteredView
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌───────────┐     ┌───────────┐
///   │ aggregate  │     │ histogram  │  per-island means / densities
///   └───────────┘     └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;

#[cfg(test)]
pub mod fixtures;
