//! Delimited-text reader with per-column type inference.
//!
//! Reads a header row plus records into a [`Table`]. A column whose every
//! non-missing cell parses as `f64` becomes numeric; anything else is kept
//! as categorical text. Missing-value tokens follow the usual tabular
//! conventions (empty cell, NA, N/A, NaN, null).

use std::path::Path;

use crate::error::PipelineError;
use crate::table::{Column, ColumnData, Table};

const MISSING_TOKENS: [&str; 4] = ["na", "n/a", "nan", "null"];

fn is_missing(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed.to_ascii_lowercase().as_str())
}

/// Read a comma-delimited file into a [`Table`].
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table, PipelineError> {
    read_csv_with_delimiter(path, b',')
}

/// Read a delimited file into a [`Table`] using an explicit delimiter
/// (e.g. `b'\t'` for TSV input).
pub fn read_csv_with_delimiter<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Table, PipelineError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| PipelineError::Parse(format!("failed to read header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(PipelineError::Parse("empty header row".to_string()));
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| PipelineError::Parse(format!("row {}: {}", row_idx + 2, e)))?;
        if record.len() != headers.len() {
            return Err(PipelineError::Parse(format!(
                "row {} has {} fields, expected {}",
                row_idx + 2,
                record.len(),
                headers.len()
            )));
        }
        for (col_idx, cell) in record.iter().enumerate() {
            let value = if is_missing(cell) {
                None
            } else {
                Some(cell.trim().to_string())
            };
            cells[col_idx].push(value);
        }
    }

    let n_rows = cells.first().map_or(0, |c| c.len());
    log::debug!(
        "read {} rows x {} columns from '{}'",
        n_rows,
        headers.len(),
        path.display()
    );

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column {
            data: infer_column(&raw),
            name,
        })
        .collect();

    Ok(Table::new(columns))
}

/// Columns where every present cell parses as a float are numeric;
/// everything else stays categorical.
fn infer_column(raw: &[Option<String>]) -> ColumnData {
    let mut numeric = Vec::with_capacity(raw.len());
    for cell in raw {
        match cell {
            None => numeric.push(None),
            Some(text) => match text.parse::<f64>() {
                Ok(v) => numeric.push(Some(v)),
                Err(_) => {
                    return ColumnData::Categorical(raw.to_vec());
                }
            },
        }
    }
    ColumnData::Numeric(numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tokens_recognized() {
        for token in ["", "  ", "NA", "n/a", "NaN", "NULL"] {
            assert!(is_missing(token), "token {:?} should count as missing", token);
        }
        assert!(!is_missing("0"));
        assert!(!is_missing("apple"));
    }

    #[test]
    fn numeric_column_inference() {
        let raw = vec![Some("1.5".to_string()), None, Some("-3".to_string())];
        match infer_column(&raw) {
            ColumnData::Numeric(values) => {
                assert_eq!(values, vec![Some(1.5), None, Some(-3.0)]);
            }
            other => panic!("expected numeric column, got {:?}", other),
        }
    }

    #[test]
    fn mixed_column_stays_categorical() {
        let raw = vec![Some("1.5".to_string()), Some("apple".to_string())];
        assert!(matches!(infer_column(&raw), ColumnData::Categorical(_)));
    }
}
