//! Upload handling and CSV ingestion for tabscope.
//!
//! This crate turns an uploaded byte stream into a Polars DataFrame:
//!
//! - **Uploads**: spool a stream into a temp file that is removed on drop
//! - **CSV Loading**: header row, comma delimiter, sampled type inference
//!
//! # Example
//!
//! ```ignore
//! use tabscope_ingest::{LoadOptions, Upload, read_csv_table};
//!
//! let upload = Upload::from_bytes("people.csv", b"id,name\n1,Alice\n")?;
//! let (df, headers) = read_csv_table(upload.path(), &LoadOptions::default())?;
//! ```

mod csv;
mod error;
mod upload;

// === Error Types ===
pub use error::{IngestError, Result};

// === Uploads ===
pub use upload::Upload;

// === CSV Reading ===
pub use csv::{
    CsvHeaders, DEFAULT_INFER_SCHEMA_LENGTH, LoadOptions, MAX_CSV_FILE_SIZE,
    check_file_size_with_limit, normalize_header, read_csv_schema, read_csv_table,
    validate_dataframe_shape, validate_encoding,
};
