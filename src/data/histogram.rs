use serde::Serialize;

use super::model::{Parameter, Record};

/// Bin count used by both dashboards.
pub const HISTOGRAM_BINS: usize = 30;

/// One bar of a density histogram: `[start, end)` (the last bin also holds
/// the maximum).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub density: f64,
}

/// Density histogram of one island.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub island: String,
    pub count: usize,
    pub bins: Vec<HistogramBin>,
}

/// Per-island density histograms sharing one set of bin edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub parameter: Parameter,
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

impl Distribution {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Highest density across all series, for axis scaling.
    pub fn max_density(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.bins.iter().map(|b| b.density))
            .fold(0.0, f64::max)
    }
}

/// Bin `parameter` into `bin_count` equal-width bins spanning the observed
/// range, one series per island (first-seen order).
///
/// Heights are densities: count / (island total × bin width), so each
/// island's bars have unit area. A single distinct value gets a unit-wide
/// range centred on it, widened further when the values are so large that
/// unit-wide bins would fall below float spacing.
pub fn density_histogram<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    parameter: Parameter,
    bin_count: usize,
) -> Distribution {
    let samples: Vec<(&str, f64)> = records
        .into_iter()
        .map(|r| (r.island.as_str(), parameter.value(r)))
        .collect();

    if samples.is_empty() || bin_count == 0 {
        return Distribution {
            parameter,
            edges: Vec::new(),
            series: Vec::new(),
        };
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
            (lo.min(v), hi.max(v))
        });
    // Every bin must span several ulps at this magnitude or the edges collapse.
    let min_span = min.abs().max(max.abs()) * f64::EPSILON * 4.0 * bin_count as f64;
    let (lo, hi) = if max - min > min_span {
        (min, max)
    } else {
        let mid = min + (max - min) / 2.0;
        let half = (min_span / 2.0).max(0.5);
        (mid - half, mid + half)
    };
    let width = (hi - lo) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count).map(|i| lo + width * i as f64).collect();

    let mut counts: Vec<(&str, Vec<usize>)> = Vec::new();
    for &(island, value) in &samples {
        let bin = (((value - lo) / width).floor() as usize).min(bin_count - 1);
        let slot = match counts.iter().position(|(name, _)| *name == island) {
            Some(pos) => pos,
            None => {
                counts.push((island, vec![0; bin_count]));
                counts.len() - 1
            }
        };
        counts[slot].1[bin] += 1;
    }

    let series = counts
        .into_iter()
        .map(|(island, bins)| {
            let total: usize = bins.iter().sum();
            let bins = bins
                .iter()
                .enumerate()
                .map(|(i, &c)| HistogramBin {
                    start: edges[i],
                    end: edges[i + 1],
                    density: c as f64 / (total as f64 * (edges[i + 1] - edges[i])),
                })
                .collect();
            HistogramSeries {
                island: island.to_string(),
                count: total,
                bins,
            }
        })
        .collect();

    Distribution {
        parameter,
        edges,
        series,
    }
}
