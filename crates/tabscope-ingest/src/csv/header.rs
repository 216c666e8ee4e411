//! CSV header reading and normalization.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Column names from the header row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads the header row of a comma-delimited file.
///
/// A file without any record is [`IngestError::EmptyCsv`]; a first record
/// whose cells are all blank is [`IngestError::NoHeaderDetected`].
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let Some(record) = reader.records().next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let record = record.map_err(|e| csv_error(path, e))?;

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(CsvHeaders::new(columns))
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => IngestError::open(path, io),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  id "), "id");
        assert_eq!(normalize_header("\u{feff}name"), "name");
    }

    #[test]
    fn test_headers_lookup() {
        let headers = CsvHeaders::new(vec!["a".into(), "b".into()]);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.position("b"), Some(1));
        assert_eq!(headers.position("c"), None);
    }
}
