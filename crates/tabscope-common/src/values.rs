//! Polars `AnyValue` utility functions.
//!
//! This module converts engine values into [`CellValue`]s and plain strings,
//! and parses numbers out of text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use polars::prelude::*;

use tabscope_model::CellValue;

/// Converts a Polars `AnyValue` into an engine-independent [`CellValue`].
///
/// Integers that do not fit an `i64` become floats; engine types without a
/// dedicated variant keep their Polars string form in [`CellValue::Other`].
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use tabscope_common::any_to_cell;
/// use tabscope_model::CellValue;
///
/// assert_eq!(any_to_cell(AnyValue::Null), CellValue::Null);
/// assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Integer(42));
/// assert_eq!(any_to_cell(AnyValue::String("hi")), CellValue::Text("hi".into()));
/// ```
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(b) => CellValue::Boolean(b),
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Float(v as f64),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Date(days) => match date_from_epoch_days(days) {
            Some(date) => CellValue::Date(date),
            None => CellValue::Other(days.to_string()),
        },
        AnyValue::Datetime(v, unit, _) => match timestamp_from_epoch(v, unit) {
            Some(ts) => CellValue::Timestamp(ts),
            None => CellValue::Other(v.to_string()),
        },
        other => CellValue::Other(other.to_string()),
    }
}

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null` and formats floats without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use tabscope_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(15.0)), "15");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => any_to_cell(other).to_string(),
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Handles integer types, floating-point types, and string parsing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an `AnyValue` to `u64`, for counts returned by aggregations.
pub fn any_to_count(value: AnyValue<'_>) -> Option<u64> {
    match value {
        AnyValue::UInt8(v) => Some(u64::from(v)),
        AnyValue::UInt16(v) => Some(u64::from(v)),
        AnyValue::UInt32(v) => Some(u64::from(v)),
        AnyValue::UInt64(v) => Some(v),
        AnyValue::Int32(v) => u64::try_from(v).ok(),
        AnyValue::Int64(v) => u64::try_from(v).ok(),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use tabscope_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(TimeDelta::try_days(i64::from(days))?)
}

fn timestamp_from_epoch(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value)?,
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value)?,
        TimeUnit::Nanoseconds => DateTime::from_timestamp_nanos(value),
    };
    Some(utc.naive_utc())
}
