//! End-to-end checks from raw CSV text to the dashboard summary.

use chem_dash::data::aggregate::{DashboardSummary, SummaryOptions, UNKNOWN_CATEGORY};
use chem_dash::data::columns::ColumnIndexMap;
use chem_dash::data::histogram::{bin_histogram, DEFAULT_BUCKETS};
use chem_dash::data::loader::parse_csv_text;
use chem_dash::data::stats::basic_stats;

const PLANT: &str = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
Pump-1,Pump,120,5.2,110
Pump-2,Pump,115.3,5.0,108
Valve-1,Valve,60,4.1,105
Compressor-1,Compressor,95,8.4,130
HX-1,HeatExchanger,150,6.2,140
Valve-2,Valve,n/a,4.0,
Reactor-1,,170,7.5,145
Pump-3,Pump,130 m3/h,5.4 bar,112
";

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn plant_summary() {
    let ds = parse_csv_text(PLANT).unwrap();
    let s = DashboardSummary::compute(&ds, &SummaryOptions::default());

    assert_eq!(s.row_count, 8);
    assert!(s.columns.missing_roles().is_empty());

    assert_eq!(
        s.type_mix,
        vec![
            ("Pump".to_string(), 3),
            ("Valve".to_string(), 2),
            ("Compressor".to_string(), 1),
            ("HeatExchanger".to_string(), 1),
            (UNKNOWN_CATEGORY.to_string(), 1),
        ]
    );

    // "n/a" is dropped, "130 m3/h" keeps only its digits: "1303".
    assert_eq!(s.flow.count, 7);
    assert_eq!(s.flow.max, Some(1303.0));
    assert_eq!(s.flow.min, Some(60.0));

    assert_eq!(s.pressure.count, 8);
    assert!(close(s.pressure.min, 4.0));
    assert!(close(s.pressure.max, 8.4));

    assert_eq!(s.temperature.count, 7);
    assert_eq!(s.flow_histogram.total(), 7);
    // Valve-2 has no temperature, so it is missing from the scatter.
    assert_eq!(s.scatter.len(), 7);
    assert!(s.scatter.iter().all(|&[p, _]| p != 4.0));
}

#[test]
fn recomputation_is_bit_identical() {
    let ds = parse_csv_text(PLANT).unwrap();
    let options = SummaryOptions::default();
    let first = DashboardSummary::compute(&ds, &options);
    let second = DashboardSummary::compute(&ds, &options);
    assert_eq!(first, second);

    let bits = |s: &DashboardSummary| {
        [s.flow.mean, s.flow.p10, s.flow.p90, s.temperature.p50]
            .map(|v| v.map(f64::to_bits))
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn resolves_alias_headers() {
    let map = ColumnIndexMap::resolve(&["Flow Rate", "Pressure", "Temp"]);
    assert_eq!(map.flow, Some(0));
    assert_eq!(map.pressure, Some(1));
    assert_eq!(map.temperature, Some(2));
    assert_eq!(map.name, None);
    assert_eq!(map.kind, None);
}

#[test]
fn partial_headers_degrade_gracefully() {
    let ds = parse_csv_text("Flow Rate,Pressure,Temp\n10,1,20\n20,2,40\n").unwrap();
    let s = DashboardSummary::compute(&ds, &SummaryOptions::compact());

    assert_eq!(s.type_mix, vec![(UNKNOWN_CATEGORY.to_string(), 2)]);
    assert_eq!(s.flow.mean, Some(15.0));
    assert_eq!(s.flow_histogram.counts.len(), DEFAULT_BUCKETS);
    assert_eq!(s.scatter, vec![[1.0, 20.0], [2.0, 40.0]]);
}

#[test]
fn scatter_is_capped() {
    let mut text = String::from("Pressure,Temperature\n");
    for i in 0..1500 {
        text.push_str(&format!("{i},{}\n", i * 2));
    }
    let ds = parse_csv_text(&text).unwrap();

    let full = DashboardSummary::compute(&ds, &SummaryOptions::default());
    assert_eq!(full.scatter.len(), 1500);

    let compact = DashboardSummary::compute(&ds, &SummaryOptions::compact());
    assert_eq!(compact.scatter.len(), 1000);
    assert_eq!(compact.scatter[999], [999.0, 1998.0]);
}

#[test]
fn reference_values() {
    let s = basic_stats(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]);
    assert!(close(s.p50, 3.0));
    assert!(close(s.p10, 1.4));
    assert!(close(s.p90, 4.6));

    let ones: Vec<Option<f64>> = (1..=10).map(|v| Some(f64::from(v))).collect();
    let h = bin_histogram(&ones, 10);
    assert_eq!(h.labels.len(), 10);
    assert_eq!(h.total(), 10);

    let h = bin_histogram(&[Some(5.0), Some(5.0), Some(5.0)], 7);
    assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
    assert_eq!(h.counts[0], 3);
}
