//! Date detection for text columns.
//!
//! CSV type inference leaves dates as text. Each text column whose leading
//! values contain text is parsed with the candidate formats in priority
//! order; the first format the [`DateAcceptance`] policy accepts replaces the
//! column with a date column of the same name and position.
//!
//! Detection never fails a profile. Engine errors while handling one column
//! are reported as [`ColumnDetection::Failed`] and the column is kept as is.

use std::fmt;

use tabscope_engine::{DateFormat, EngineError, ParsedColumn, Table, TableEngine};
use tabscope_model::{CellValue, ColumnType};
use tracing::debug;

use crate::options::ProfileOptions;

/// When a parse attempt is good enough to replace the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateAcceptance {
    /// At least one row parsed. Rows that did not parse become null.
    #[default]
    AnyMatch,
    /// More than half of the non-null rows parsed.
    Majority,
    /// Every non-null row parsed.
    Complete,
}

impl DateAcceptance {
    pub fn accepts(self, parsed: &ParsedColumn) -> bool {
        match self {
            DateAcceptance::AnyMatch => parsed.any_parsed(),
            DateAcceptance::Majority => parsed.parsed * 2 > parsed.non_null_source,
            DateAcceptance::Complete => parsed.any_parsed() && parsed.unparsed() == 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateAcceptance::AnyMatch => "any",
            DateAcceptance::Majority => "majority",
            DateAcceptance::Complete => "complete",
        }
    }
}

impl fmt::Display for DateAcceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a column was not parsed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The column's declared type is not text.
    NotText(ColumnType),
    /// None of the leading values is text.
    NoTextInSample,
}

/// Outcome of date detection for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDetection {
    /// The column now holds dates parsed with `format`.
    Coerced {
        format: DateFormat,
        parsed: usize,
        /// Non-null rows that became null.
        unparsed: usize,
    },
    /// No candidate format was accepted; the column is unchanged.
    NoMatch,
    Skipped(SkipReason),
    /// The engine failed; the column is unchanged.
    Failed(String),
}

impl ColumnDetection {
    pub fn is_coerced(&self) -> bool {
        matches!(self, ColumnDetection::Coerced { .. })
    }
}

impl fmt::Display for ColumnDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnDetection::Coerced {
                format,
                parsed,
                unparsed,
            } => write!(f, "date ({format}, {parsed} parsed, {unparsed} nulled)"),
            ColumnDetection::NoMatch => f.write_str("no date format matched"),
            ColumnDetection::Skipped(SkipReason::NotText(ty)) => write!(f, "skipped ({ty})"),
            ColumnDetection::Skipped(SkipReason::NoTextInSample) => {
                f.write_str("skipped (no text in sample)")
            }
            ColumnDetection::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Runs date detection on one column.
///
/// Returns the table to continue with, which is `table` itself unless the
/// column was coerced.
pub fn detect_date_column<E: TableEngine + ?Sized>(
    engine: &E,
    table: Table,
    column: &str,
    options: &ProfileOptions,
) -> (Table, ColumnDetection) {
    let (table, outcome) = match try_detect(engine, &table, column, options) {
        Ok((Some(updated), outcome)) => (updated, outcome),
        Ok((None, outcome)) => (table, outcome),
        Err(err) => (table, ColumnDetection::Failed(err.to_string())),
    };
    debug!(column = %column, outcome = %outcome, "date detection");
    (table, outcome)
}

fn try_detect<E: TableEngine + ?Sized>(
    engine: &E,
    table: &Table,
    column: &str,
    options: &ProfileOptions,
) -> Result<(Option<Table>, ColumnDetection), EngineError> {
    let column_type = table.column_type(column)?;
    if !column_type.is_textual() {
        return Ok((None, ColumnDetection::Skipped(SkipReason::NotText(column_type))));
    }

    let sample = engine.head_values(table, column, options.detection_sample)?;
    if !sample.iter().any(CellValue::is_text) {
        return Ok((None, ColumnDetection::Skipped(SkipReason::NoTextInSample)));
    }

    for format in &options.date_formats {
        let parsed = engine.parse_dates(table, column, format)?;
        if !options.acceptance.accepts(&parsed) {
            debug!(
                column = %column,
                format = %format,
                parsed = parsed.parsed,
                non_null = parsed.non_null_source,
                "date format rejected"
            );
            continue;
        }
        let outcome = ColumnDetection::Coerced {
            format: format.clone(),
            parsed: parsed.parsed,
            unparsed: parsed.unparsed(),
        };
        let updated = engine.replace_column(table, parsed)?;
        return Ok((Some(updated), outcome));
    }

    Ok((None, ColumnDetection::NoMatch))
}

/// Runs date detection on every column, in table order.
pub fn coerce_date_columns<E: TableEngine + ?Sized>(
    engine: &E,
    table: Table,
    options: &ProfileOptions,
) -> (Table, Vec<(String, ColumnDetection)>) {
    let columns = table.column_names();
    let mut outcomes = Vec::with_capacity(columns.len());
    let mut table = table;
    for column in columns {
        let (next, outcome) = detect_date_column(engine, table, &column, options);
        table = next;
        outcomes.push((column, outcome));
    }
    (table, outcomes)
}
