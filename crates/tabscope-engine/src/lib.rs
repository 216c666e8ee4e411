//! Table engine for tabscope.
//!
//! The profiler talks to its compute engine through the [`TableEngine`]
//! trait. [`PolarsEngine`] is the production implementation; tests wrap it
//! to inject failures.
//!
//! # Example
//!
//! ```ignore
//! use tabscope_engine::{DateFormat, PolarsEngine, TableEngine};
//! use tabscope_ingest::LoadOptions;
//!
//! let engine = PolarsEngine::new();
//! let table = engine.load_csv(path, &LoadOptions::default())?;
//! let parsed = engine.parse_dates(&table, "signup_date", &DateFormat::ISO)?;
//! let table = engine.replace_column(&table, parsed)?;
//! ```

mod date_format;
mod describe;
mod engine;
mod error;
mod polars_engine;
mod table;

pub use date_format::DateFormat;
pub use describe::{ColumnStats, Describe};
pub use engine::{ParsedColumn, TableEngine};
pub use error::{EngineError, Result};
pub use polars_engine::PolarsEngine;
pub use table::{Table, column_type_of};
