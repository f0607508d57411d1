//! CSV ingest of line-ratio catalogs.
//!
//! Turns a catalog CSV into clean `LineRatioPoint`s:
//! - **Strict schema** for the ratio columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - no classification logic here
//!
//! Accepted columns (case-insensitive):
//! - x: `x`, `log_x`, `x_ratio`
//! - y: `y`, `log_oiii_hb`, `oiii_hb`
//! - id (optional): `id`, `name`

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::LineRatioPoint;
use crate::error::{AppError, EXIT_NO_DATA};

const X_COLUMNS: &[&str] = &["x", "log_x", "x_ratio"];
const Y_COLUMNS: &[&str] = &["y", "log_oiii_hb", "oiii_hb"];
const ID_COLUMNS: &[&str] = &["id", "name"];

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Ingest output: parsed points + row errors.
#[derive(Debug, Clone)]
pub struct IngestedRatios {
    pub points: Vec<LineRatioPoint>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load a line-ratio catalog from `path`.
pub fn load_line_ratios(path: &Path) -> Result<IngestedRatios, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let ingested = parse_line_ratios(file)?;
    log::info!(
        "read {} row(s) from {}, {} usable",
        ingested.rows_read,
        path.display(),
        ingested.rows_used
    );
    Ok(ingested)
}

/// Parse a line-ratio catalog from any reader.
pub fn parse_line_ratios<R: Read>(input: R) -> Result<IngestedRatios, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let x_idx = find_column(&header_map, X_COLUMNS)
        .ok_or_else(|| missing_column_error("x", X_COLUMNS))?;
    let y_idx = find_column(&header_map, Y_COLUMNS)
        .ok_or_else(|| missing_column_error("y", Y_COLUMNS))?;
    let id_idx = find_column(&header_map, ID_COLUMNS);

    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let id = id_idx
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row{line}"));

        match parse_row(&record, x_idx, y_idx) {
            Ok((x, y)) => points.push(LineRatioPoint { id, x, y }),
            Err(message) => {
                log::warn!("skipping line {line} ({id}): {message}");
                row_errors.push(RowError {
                    line,
                    id: Some(id),
                    message,
                });
            }
        }
    }

    let rows_used = points.len();
    if rows_used == 0 {
        return Err(AppError::new(EXIT_NO_DATA, "No valid rows in the line-ratio CSV."));
    }

    Ok(IngestedRatios {
        points,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn find_column(header_map: &HashMap<String, usize>, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|n| header_map.get(*n).copied())
}

fn missing_column_error(axis: &str, names: &[&str]) -> AppError {
    AppError::usage(format!(
        "CSV is missing the {axis} column (expected one of: {}).",
        names.join(", ")
    ))
}

fn parse_row(record: &StringRecord, x_idx: usize, y_idx: usize) -> Result<(f64, f64), String> {
    let x = parse_ratio(record.get(x_idx), "x")?;
    let y = parse_ratio(record.get(y_idx), "y")?;
    Ok((x, y))
}

fn parse_ratio(value: Option<&str>, name: &str) -> Result<f64, String> {
    let raw = value.filter(|s| !s.is_empty()).ok_or_else(|| format!("missing {name}"))?;
    let v: f64 = raw
        .parse()
        .map_err(|_| format!("invalid {name} value '{raw}'"))?;
    if !v.is_finite() {
        return Err(format!("non-finite {name} value '{raw}'"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_defaults_ids() {
        let csv = "x,y,id\n-1.0,-0.5,g1\n-0.2,0.2,\n";
        let out = parse_line_ratios(csv.as_bytes()).unwrap();
        assert_eq!(out.rows_read, 2);
        assert_eq!(out.rows_used, 2);
        assert_eq!(out.points[0].id, "g1");
        assert_eq!(out.points[1].id, "row3");
        assert_eq!(out.points[1].x, -0.2);
    }

    #[test]
    fn accepts_aliases_bom_and_case() {
        let csv = "\u{feff}Name,LOG_X,log_OIII_hb\nngc1,-0.4,0.1\n";
        let out = parse_line_ratios(csv.as_bytes()).unwrap();
        assert_eq!(out.points[0].id, "ngc1");
        assert_eq!(out.points[0].y, 0.1);
    }

    #[test]
    fn bad_rows_are_skipped_and_reported() {
        let csv = "id,x,y\na,-1.0,0.0\nb,abc,0.0\nc,-1.0,\nd,inf,0.0\n";
        let out = parse_line_ratios(csv.as_bytes()).unwrap();
        assert_eq!(out.rows_read, 4);
        assert_eq!(out.rows_used, 1);
        assert_eq!(out.row_errors.len(), 3);
        assert_eq!(out.row_errors[0].line, 3);
        assert_eq!(out.row_errors[0].id.as_deref(), Some("b"));
    }

    #[test]
    fn missing_column_is_a_usage_error() {
        let err = parse_line_ratios("id,x\na,1.0\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn no_usable_rows_is_no_data() {
        let err = parse_line_ratios("x,y\nfoo,bar\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_NO_DATA);
    }
}
