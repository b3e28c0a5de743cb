/// Data layer: dataset loading, column resolution, and summary statistics.
///
/// Architecture:
/// ```text
///   .csv text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines / commas → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  columns  │  header aliases → ColumnIndexMap
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  coerce   │ ───▶ │   stats    │  count / min / max / mean / p10 / p50 / p90
///   └──────────┘      │ histogram  │  equal-width buckets
///                     └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  type mix, scatter points, DashboardSummary
///   └───────────┘
/// ```
///
/// Everything below `loader` is a pure function of the dataset; nothing here
/// returns an error. Missing data shows up as `None`, empty vectors, or the
/// `"Unknown"` category.

pub mod aggregate;
pub mod coerce;
pub mod columns;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod stats;
