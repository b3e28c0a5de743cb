// ---------------------------------------------------------------------------
// Dataset – the parsed CSV table
// ---------------------------------------------------------------------------

/// Placeholder shown wherever a value is missing.
pub const MISSING: &str = "—";

/// Headers plus string rows, aligned by position.
///
/// Rows may be shorter or longer than `headers`; lookups past the end of a
/// row are treated as absent cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// File name the data came from, if any.
    pub source: Option<String>,
    /// Header labels as written in the file (trimmed).
    pub headers: Vec<String>,
    /// Data rows (trimmed cells).
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Dataset {
            source: None,
            headers,
            rows,
        }
    }

    /// Cell at `row`, column `col`; `None` for ragged rows or out-of-range rows.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Format an optional number with a fixed number of decimals, or [`MISSING`].
///
/// Exact decimal ties round away from zero (`0.25` → `"0.3"`), values that
/// only look like ties keep their binary rounding (`1.005` → `"1.00"`), and
/// negative zero prints as zero.
pub fn pretty(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if v == 0.0 => format!("{:.digits$}", 0.0),
        Some(v) if v.is_finite() && is_exact_tie(v.abs(), digits) => {
            let scale = 10f64.powi(digits as i32);
            let away = ((v.abs() * scale).trunc() + 1.0) / scale;
            format!("{:.digits$}", away.copysign(v))
        }
        Some(v) if !v.is_nan() => format!("{v:.digits$}"),
        _ => MISSING.to_string(),
    }
}

/// True when the exact binary value of `x` is `…5000…` right after `digits`.
fn is_exact_tie(x: f64, digits: usize) -> bool {
    // Every finite f64 has a terminating expansion of at most 1074 decimals.
    let exact = format!("{x:.1100}");
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    match fraction.get(digits..) {
        Some(rest) => rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0'),
        None => false,
    }
}
