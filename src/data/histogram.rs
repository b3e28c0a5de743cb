use serde::Serialize;

use super::model::pretty;

/// Bucket count used when the caller has no preference.
pub const DEFAULT_BUCKETS: usize = 10;

/// Bucket count of the flowrate chart on the dashboard.
pub const DASHBOARD_BUCKETS: usize = 12;

// ---------------------------------------------------------------------------
// Histogram – equal-width buckets
// ---------------------------------------------------------------------------

/// Bucket labels (`"low–high"`) paired positionally with counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of values placed in any bucket.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(label, count)` pairs in bucket order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

/// Partition the finite values into `buckets` equal-width intervals spanning
/// `[min, max]`.
///
/// When every value is identical the width falls back to `1`, so all of them
/// land in the first bucket. The maximum itself goes into the last bucket.
/// No finite values (or zero buckets) gives an empty histogram.
pub fn bin_histogram(values: &[Option<f64>], buckets: usize) -> Histogram {
    let finite: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() || buckets == 0 {
        return Histogram::default();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut width = (max - min) / buckets as f64;
    if width == 0.0 {
        width = 1.0;
    }

    let last = buckets - 1;
    let mut counts = vec![0usize; buckets];
    for v in &finite {
        let idx = ((v - min) / width).floor();
        // `as usize` saturates negatives to 0; the upper clamp keeps `max` in range.
        let idx = (idx as usize).min(last);
        counts[idx] += 1;
    }

    let labels = (0..buckets)
        .map(|i| {
            let low = min + i as f64 * width;
            let high = min + (i + 1) as f64 * width;
            format!("{}–{}", pretty(Some(low), 1), pretty(Some(high), 1))
        })
        .collect();

    Histogram { labels, counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn one_to_ten_in_ten_buckets() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let h = bin_histogram(&some(&values), DEFAULT_BUCKETS);
        assert_eq!(h.labels.len(), 10);
        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.total(), 10);
        assert_eq!(h.labels[0], "1.0–1.9");
        assert_eq!(h.labels[9], "9.1–10.0");
        // 10 is the maximum and must not overflow past the last bucket.
        assert_eq!(h.counts, vec![1; 10]);
    }

    #[test]
    fn identical_values_fall_back_to_unit_width() {
        let h = bin_histogram(&some(&[5.0, 5.0, 5.0]), 4);
        assert_eq!(h.counts, vec![3, 0, 0, 0]);
        assert_eq!(
            h.labels,
            vec!["5.0–6.0", "6.0–7.0", "7.0–8.0", "8.0–9.0"]
        );
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
    }

    #[test]
    fn maximum_lands_in_last_bucket() {
        let h = bin_histogram(&some(&[0.0, 12.0]), DASHBOARD_BUCKETS);
        assert_eq!(h.counts.len(), 12);
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[11], 1);
        assert_eq!(h.total(), 2);
    }

    #[test]
    fn negative_ranges() {
        let h = bin_histogram(&some(&[-10.0, -5.0, 0.0]), 2);
        assert_eq!(h.labels, vec!["-10.0–-5.0", "-5.0–0.0"]);
        assert_eq!(h.counts, vec![1, 2]);
    }

    #[test]
    fn nulls_are_skipped() {
        let h = bin_histogram(&[None, Some(1.0), Some(f64::NAN), Some(3.0)], 2);
        assert_eq!(h.counts, vec![1, 1]);
    }

    #[test]
    fn empty_inputs() {
        assert!(bin_histogram(&[], DEFAULT_BUCKETS).is_empty());
        assert!(bin_histogram(&[None, None], DEFAULT_BUCKETS).is_empty());
        let h = bin_histogram(&some(&[1.0, 2.0]), 0);
        assert!(h.is_empty());
        assert!(h.labels.is_empty());
    }

    #[test]
    fn buckets_pairs_labels_and_counts() {
        let h = bin_histogram(&some(&[0.0, 1.0]), 2);
        let pairs: Vec<_> = h.buckets().collect();
        assert_eq!(pairs, vec![("0.0–0.5", 1), ("0.5–1.0", 1)]);
    }

    #[test]
    fn tie_edges_round_away_from_zero() {
        let h = bin_histogram(&some(&[0.0, 0.5]), 2);
        assert_eq!(h.labels, vec!["0.0–0.3", "0.3–0.5"]);
    }
}
