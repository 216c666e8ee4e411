//! Dataset profiling for tabscope.
//!
//! - **formatter**: display rendering of single cells
//! - **detector**: date detection and coercion of text columns
//! - **builder**: profile assembly over a [`TableEngine`](tabscope_engine::TableEngine)
//!
//! # Example
//!
//! ```ignore
//! use tabscope_core::{ProfileBuilder, ProfileOptions};
//! use tabscope_engine::PolarsEngine;
//! use tabscope_ingest::Upload;
//!
//! let upload = Upload::from_path("customers.csv")?;
//! let builder = ProfileBuilder::new(PolarsEngine::new(), ProfileOptions::default());
//! let response = builder.respond(Some(&upload));
//! ```

pub mod builder;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod options;

pub use builder::{NOT_APPLICABLE, NULL_SUM, ProfileBuilder, into_response};
pub use detector::{
    ColumnDetection, DateAcceptance, SkipReason, coerce_date_columns, detect_date_column,
};
pub use error::ProfileError;
pub use formatter::{NUMERIC_DECIMALS, format_value};
pub use options::{DEFAULT_DETECTION_SAMPLE, DEFAULT_SAMPLE_ROWS, ProfileOptions};
