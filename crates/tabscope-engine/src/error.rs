//! Error types for table engine operations.

use polars::prelude::PolarsError;
use tabscope_ingest::IngestError;
use thiserror::Error;

/// Errors raised by a [`TableEngine`](crate::TableEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Loading the source file failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The table has no column with this name.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Date parsing was requested on a column that does not hold text.
    #[error("column '{column}' is {dtype}, not text")]
    NotTextual { column: String, dtype: String },

    /// A date pattern could not be translated for the engine.
    #[error("invalid date format '{pattern}': {reason}")]
    InvalidDateFormat { pattern: String, reason: String },

    /// Error from the Polars engine.
    #[error("{0}")]
    Polars(#[from] PolarsError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
