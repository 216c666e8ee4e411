//! CSV file reading with schema inference.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, read_csv_schema};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows scanned by schema inference unless configured otherwise.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// Options controlling how a CSV file becomes a DataFrame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Rows scanned for type inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
    /// Let the reader itself recognise date and datetime columns.
    ///
    /// Off by default: date recognition is left to the profiler's detector,
    /// which knows more formats.
    pub try_parse_dates: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
            max_file_size: MAX_CSV_FILE_SIZE,
            try_parse_dates: false,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    #[must_use]
    pub fn with_try_parse_dates(mut self, enable: bool) -> Self {
        self.try_parse_dates = enable;
        self
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable
    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Zero rows is not an error here; whether an empty table is acceptable is
/// the caller's decision.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a comma-delimited file with a header row into a Polars DataFrame.
///
/// Column types are inferred from the first `infer_schema_length` rows.
/// Returns both the DataFrame and the header information.
pub fn read_csv_table(path: &Path, options: &LoadOptions) -> Result<(DataFrame, CsvHeaders)> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let try_parse_dates = options.try_parse_dates;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| parse.with_try_parse_dates(try_parse_dates))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    validate_dataframe_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );

    Ok((df, headers))
}
