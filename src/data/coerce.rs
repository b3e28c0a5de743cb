// ---------------------------------------------------------------------------
// Numeric coercion: raw cell text → Option<f64>
// ---------------------------------------------------------------------------

/// Characters kept before parsing; everything else (units, thousands
/// separators, whitespace, `+`) is dropped.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E')
}

/// Coerce a cell into a finite number.
///
/// `"1,250 kg/h"` becomes `1250.0`, `"-3.5e2"` becomes `-350.0`. Anything
/// whose stripped remainder is empty, malformed (`"1-2"`, `"1e"`, `"--4"`)
/// or non-finite (`"1e400"`) yields `None`.
pub fn to_number(cell: Option<&str>) -> Option<f64> {
    let stripped: String = cell?.chars().filter(|&c| is_numeric_char(c)).collect();
    stripped.parse::<f64>().ok().filter(|n| n.is_finite())
}
