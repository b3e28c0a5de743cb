use serde::Serialize;

// ---------------------------------------------------------------------------
// StatsSummary – descriptive statistics of one numeric column
// ---------------------------------------------------------------------------

/// Count, extremes, mean and three percentiles of the finite values.
/// Every field except `count` is `None` when there were no finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub p10: Option<f64>,
    pub p50: Option<f64>,
    pub p90: Option<f64>,
}

impl StatsSummary {
    /// Summary of an empty column.
    pub fn empty() -> Self {
        StatsSummary::default()
    }

    /// The median, i.e. `p50`.
    pub fn median(&self) -> Option<f64> {
        self.p50
    }
}

/// Summarise a column of coerced values, ignoring `None` and non-finite entries.
pub fn basic_stats(values: &[Option<f64>]) -> StatsSummary {
    let mut sorted: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if sorted.is_empty() {
        return StatsSummary::empty();
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;

    StatsSummary {
        count,
        min: sorted.first().copied(),
        max: sorted.last().copied(),
        mean: Some(mean),
        p10: percentile(&sorted, 0.1),
        p50: percentile(&sorted, 0.5),
        p90: percentile(&sorted, 0.9),
    }
}

/// Percentile of an ascending slice by linear interpolation between order
/// statistics: the rank is `(n - 1) * p`, and a fractional rank blends the
/// two neighbouring values by its fractional part.
///
/// `p` is clamped to `[0, 1]`. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64))
}
