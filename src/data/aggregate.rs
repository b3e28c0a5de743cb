use std::collections::HashMap;

use serde::Serialize;

use super::coerce::to_number;
use super::columns::ColumnIndexMap;
use super::histogram::{bin_histogram, Histogram, DASHBOARD_BUCKETS, DEFAULT_BUCKETS};
use super::model::Dataset;
use super::stats::{basic_stats, StatsSummary};

/// Category used for rows with no type column or a blank type cell.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// `(category, count)` pairs, most frequent first.
pub type CategoryTally = Vec<(String, usize)>;

// ---------------------------------------------------------------------------
// Column extraction
// ---------------------------------------------------------------------------

/// Count rows per category of column `type_idx`, most frequent first.
///
/// Ties keep the order in which the categories were first seen.
pub fn category_tally(dataset: &Dataset, type_idx: Option<usize>) -> CategoryTally {
    let mut tally: CategoryTally = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for row in 0..dataset.len() {
        let category = type_idx
            .and_then(|idx| dataset.cell(row, idx))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_CATEGORY);

        match slot.get(category) {
            Some(&i) => tally[i].1 += 1,
            None => {
                slot.insert(category.to_string(), tally.len());
                tally.push((category.to_string(), 1));
            }
        }
    }

    // `sort_by` is stable, so equal counts stay in first-seen order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
}

/// Coerce every cell of column `idx`; empty when the column was not found.
pub fn column_values(dataset: &Dataset, idx: Option<usize>) -> Vec<Option<f64>> {
    match idx {
        Some(idx) => (0..dataset.len())
            .map(|row| to_number(dataset.cell(row, idx)))
            .collect(),
        None => Vec::new(),
    }
}

/// `[pressure, temperature]` pairs for rows where both are numbers, keeping
/// at most the first `cap`.
pub fn scatter_points(
    dataset: &Dataset,
    pressure_idx: Option<usize>,
    temperature_idx: Option<usize>,
    cap: usize,
) -> Vec<[f64; 2]> {
    let (Some(p_idx), Some(t_idx)) = (pressure_idx, temperature_idx) else {
        return Vec::new();
    };
    (0..dataset.len())
        .filter_map(|row| {
            let x = to_number(dataset.cell(row, p_idx))?;
            let y = to_number(dataset.cell(row, t_idx))?;
            Some([x, y])
        })
        .take(cap)
        .collect()
}

// ---------------------------------------------------------------------------
// DashboardSummary – everything the presentation layer draws
// ---------------------------------------------------------------------------

/// Knobs that differ between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub histogram_buckets: usize,
    pub scatter_cap: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            histogram_buckets: DASHBOARD_BUCKETS,
            scatter_cap: 2000,
        }
    }
}

impl SummaryOptions {
    /// Smaller histogram and scatter cap for lightweight views.
    pub fn compact() -> Self {
        SummaryOptions {
            histogram_buckets: DEFAULT_BUCKETS,
            scatter_cap: 1000,
        }
    }
}

/// All derived values for one dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub columns: ColumnIndexMap,
    pub row_count: usize,
    pub type_mix: CategoryTally,
    pub flow: StatsSummary,
    pub pressure: StatsSummary,
    pub temperature: StatsSummary,
    pub flow_histogram: Histogram,
    pub scatter: Vec<[f64; 2]>,
}

impl DashboardSummary {
    /// Derive every dashboard value from `dataset`. Pure: the same dataset
    /// and options always produce an identical summary.
    pub fn compute(dataset: &Dataset, options: &SummaryOptions) -> Self {
        let columns = ColumnIndexMap::resolve(dataset.headers.as_slice());

        let flow_values = column_values(dataset, columns.flow);
        let pressure_values = column_values(dataset, columns.pressure);
        let temperature_values = column_values(dataset, columns.temperature);

        DashboardSummary {
            columns,
            row_count: dataset.len(),
            type_mix: category_tally(dataset, columns.kind),
            flow: basic_stats(&flow_values),
            pressure: basic_stats(&pressure_values),
            temperature: basic_stats(&temperature_values),
            flow_histogram: bin_histogram(&flow_values, options.histogram_buckets),
            scatter: scatter_points(
                dataset,
                columns.pressure,
                columns.temperature,
                options.scatter_cap,
            ),
        }
    }
}
