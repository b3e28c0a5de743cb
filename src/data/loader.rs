use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an equipment dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – header row followed by comma-separated rows
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => {}
        other => bail!("Unsupported file extension: .{other}"),
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut dataset = parse_csv_text(&text)?;
    dataset.source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: first line holds the headers, every further line one row.
///
/// Lines are split on every comma. Quotes are NOT interpreted, so a quoted
/// field containing a comma is split into two cells (known limitation).
/// Headers and cells are trimmed, and rows may have more or fewer cells than
/// there are headers. Leading and trailing blank lines are dropped, while a
/// blank line between rows is kept as a row with a single empty cell.
///
/// Text that is empty once trimmed has no header line and is an error, so
/// the caller keeps whatever it showed before instead of rendering nothing.
pub fn parse_csv_text(text: &str) -> Result<Dataset> {
    let lines = blank_lines_as_cells(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(lines.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Dataset::new(headers, rows))
}

/// Normalise line endings, trim the text and turn each interior empty line
/// into a single space. The reader skips empty lines, but a space survives
/// as one record whose only cell trims to `""`.
fn blank_lines_as_cells(text: &str) -> String {
    let normalised = text.replace("\r\n", "\n");
    let trimmed = normalised.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed
        .split('\n')
        .map(|line| if line.is_empty() { " " } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "Equipment Name, Type ,Flowrate,Pressure,Temperature\r\n\
                          Pump-1,Pump,120.5,5.2,110\r\n\
                          Valve-1, Valve ,60,4.1,105\r\n";

    #[test]
    fn parses_headers_and_trimmed_rows() {
        let ds = parse_csv_text(SAMPLE).unwrap();
        assert_eq!(
            ds.headers,
            vec!["Equipment Name", "Type", "Flowrate", "Pressure", "Temperature"]
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1], vec!["Valve-1", "Valve", "60", "4.1", "105"]);
        assert_eq!(ds.source, None);
    }

    #[test]
    fn ragged_rows_are_kept() {
        let ds = parse_csv_text("a,b,c\n1,2\n1,2,3,4\n").unwrap();
        assert_eq!(ds.rows[0].len(), 2);
        assert_eq!(ds.rows[1].len(), 4);
        assert_eq!(ds.cell(0, 2), None);
    }

    #[test]
    fn interior_blank_line_is_an_empty_row() {
        let ds = parse_csv_text("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows[1], vec![""]);
        assert_eq!(ds.rows[2], vec!["3", "4"]);
    }

    #[test]
    fn outer_blank_lines_are_dropped() {
        let ds = parse_csv_text("\r\n\na,b\r\n1,2\r\n\r\n\n").unwrap();
        assert_eq!(ds.headers, vec!["a", "b"]);
        assert_eq!(ds.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn blank_row_counts_as_unknown_type() {
        use crate::data::aggregate::{category_tally, UNKNOWN_CATEGORY};

        let ds = parse_csv_text("Name,Type\nP-1,Pump\n\nP-2,Pump\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            category_tally(&ds, Some(1)),
            vec![("Pump".to_string(), 2), (UNKNOWN_CATEGORY.to_string(), 1)]
        );
    }

    #[test]
    fn quoted_commas_are_split() {
        let ds = parse_csv_text("Name,Type\n\"Pump, main\",Pump\n").unwrap();
        assert_eq!(ds.rows[0], vec!["\"Pump", "main\"", "Pump"]);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let ds = parse_csv_text("Name,Type\n").unwrap();
        assert_eq!(ds.headers.len(), 2);
        assert!(ds.is_empty());
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(parse_csv_text("").is_err());
        assert!(parse_csv_text(" \r\n\n ").is_err());
    }

    #[test]
    fn load_file_records_source_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plant.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.source.as_deref(), Some("plant.csv"));
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn load_file_rejects_other_extensions() {
        let err = load_file(Path::new("plant.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
