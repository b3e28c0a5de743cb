//! Property-based tests for coercion, statistics, histograms and tallies.

use chem_dash::data::aggregate::{category_tally, DashboardSummary, SummaryOptions};
use chem_dash::data::coerce::to_number;
use chem_dash::data::histogram::bin_histogram;
use chem_dash::data::model::Dataset;
use chem_dash::data::stats::{basic_stats, percentile};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn values() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(finite()), 0..200)
}

proptest! {
    #[test]
    fn text_without_numeric_characters_is_none(s in "[a-dA-DfghF-Z /%°_,:;!?]*") {
        prop_assert_eq!(to_number(Some(s.as_str())), None);
    }

    #[test]
    fn formatted_numbers_round_trip(v in finite()) {
        let text = format!("{v}");
        prop_assert_eq!(to_number(Some(text.as_str())), Some(v));
    }

    #[test]
    fn stats_are_ordered(vals in values()) {
        let s = basic_stats(&vals);
        let expected = vals.iter().flatten().count();
        prop_assert_eq!(s.count, expected);
        if expected == 0 {
            prop_assert!(s.min.is_none() && s.mean.is_none() && s.p90.is_none());
        } else {
            let (min, max) = (s.min.unwrap(), s.max.unwrap());
            let eps = 1e-6 * (1.0 + max.abs().max(min.abs()));
            for p in [s.p10, s.p50, s.p90, s.mean] {
                let p = p.unwrap();
                prop_assert!(p >= min - eps && p <= max + eps);
            }
            prop_assert!(s.p10.unwrap() <= s.p50.unwrap() + eps);
            prop_assert!(s.p50.unwrap() <= s.p90.unwrap() + eps);
        }
    }

    #[test]
    fn percentile_hits_order_statistics(raw in prop::collection::vec(finite(), 1..50)) {
        let mut sorted = raw;
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        for (k, &v) in sorted.iter().enumerate() {
            if n > 1 {
                let p = k as f64 / (n - 1) as f64;
                let got = percentile(&sorted, p).unwrap();
                prop_assert!((got - v).abs() <= 1e-6 * (1.0 + v.abs()));
            }
        }
        prop_assert_eq!(percentile(&sorted, 0.0), Some(sorted[0]));
        prop_assert_eq!(percentile(&sorted, 1.0), Some(sorted[n - 1]));
    }

    #[test]
    fn histogram_counts_every_value(vals in values(), buckets in 1usize..40) {
        let h = bin_histogram(&vals, buckets);
        let expected = vals.iter().flatten().count();
        if expected == 0 {
            prop_assert!(h.is_empty());
        } else {
            prop_assert_eq!(h.labels.len(), buckets);
            prop_assert_eq!(h.counts.len(), buckets);
            prop_assert_eq!(h.total(), expected);
        }
    }

    #[test]
    fn tally_is_sorted_and_complete(types in prop::collection::vec("[A-D ]{0,2}", 0..100)) {
        let ds = Dataset::new(
            vec!["Type".to_string()],
            types.iter().map(|t| vec![t.clone()]).collect(),
        );
        let tally = category_tally(&ds, Some(0));
        prop_assert_eq!(tally.iter().map(|(_, c)| c).sum::<usize>(), types.len());
        for pair in tally.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn summary_is_deterministic(
        rows in prop::collection::vec(
            (prop::sample::select(vec!["Pump", "Valve", "", "Mixer"]), finite(), finite(), finite()),
            0..60,
        )
    ) {
        let ds = Dataset::new(
            ["Name", "Type", "Flowrate", "Pressure", "Temperature"]
                .map(String::from)
                .to_vec(),
            rows.iter()
                .enumerate()
                .map(|(i, (t, f, p, temp))| {
                    vec![format!("E-{i}"), t.to_string(), f.to_string(), p.to_string(), temp.to_string()]
                })
                .collect(),
        );
        let options = SummaryOptions::default();
        let a = DashboardSummary::compute(&ds, &options);
        let b = DashboardSummary::compute(&ds, &options);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.row_count, rows.len());
        prop_assert_eq!(a.scatter.len(), rows.len());
    }
}
