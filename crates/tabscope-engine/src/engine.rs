//! The engine seam used by the profiler.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::Column;
use tabscope_ingest::LoadOptions;
use tabscope_model::CellValue;

use crate::date_format::DateFormat;
use crate::describe::Describe;
use crate::error::Result;
use crate::table::Table;

/// A text column parsed into dates with one format.
#[derive(Debug, Clone)]
pub struct ParsedColumn {
    /// Date-typed column carrying the source column's name.
    pub column: Column,
    /// Rows that parsed to a date.
    pub parsed: usize,
    /// Rows of the source column that were not null.
    pub non_null_source: usize,
}

impl ParsedColumn {
    pub fn name(&self) -> &str {
        self.column.name().as_str()
    }

    /// True when at least one row parsed.
    pub fn any_parsed(&self) -> bool {
        self.parsed > 0
    }

    /// Non-null source rows that did not parse.
    pub fn unparsed(&self) -> usize {
        self.non_null_source.saturating_sub(self.parsed)
    }
}

/// Table operations the profiler needs from a compute engine.
///
/// Every call is blocking and owns no state between calls; the engine is
/// free to parallelise internally.
pub trait TableEngine {
    /// Loads a CSV file with a header row, inferring column types.
    fn load_csv(&self, path: &Path, options: &LoadOptions) -> Result<Table>;

    /// Up to `limit` values of `column`, in storage order.
    fn head_values(&self, table: &Table, column: &str, limit: usize) -> Result<Vec<CellValue>>;

    /// Parses every row of a text column as a date with `format`.
    ///
    /// Rows that do not match become null; a row never fails the call.
    fn parse_dates(&self, table: &Table, column: &str, format: &DateFormat)
    -> Result<ParsedColumn>;

    /// New table with the parsed column in place of its source.
    fn replace_column(&self, table: &Table, parsed: ParsedColumn) -> Result<Table> {
        table.with_column(parsed.column)
    }

    /// Count, mean, stddev, min, and max of every numeric or text column.
    fn describe(&self, table: &Table) -> Result<Describe>;

    /// The first `limit` rows, one value per column in table order.
    fn head_rows(&self, table: &Table, limit: usize) -> Result<Vec<Vec<CellValue>>>;

    /// Sum of each listed column; `None` when the column has no non-null value.
    fn sums(&self, table: &Table, columns: &[String]) -> Result<BTreeMap<String, Option<f64>>>;

    /// Number of null cells in every column.
    fn null_counts(&self, table: &Table) -> Result<BTreeMap<String, usize>>;
}
