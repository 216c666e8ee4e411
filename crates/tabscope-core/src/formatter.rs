//! Display rendering of single cells.

use tabscope_common::format_number;
use tabscope_model::{CellValue, ColumnType};

/// Fractional digits shown for numeric values.
pub const NUMERIC_DECIMALS: usize = 2;

/// Renders one cell for display, according to its column's declared type.
///
/// Null is `"null"` for every type. Date and timestamp columns show the
/// calendar date only; numeric columns show exactly two decimals with
/// thousands separators. A value that does not fit its declared type falls
/// back to its plain string form.
pub fn format_value(value: &CellValue, column_type: &ColumnType) -> String {
    if value.is_null() {
        return "null".to_string();
    }
    if column_type.is_temporal() {
        return match value.as_date() {
            Some(date) => CellValue::Date(date).to_string(),
            None => value.to_string(),
        };
    }
    if column_type.is_numeric() {
        return value
            .as_f64()
            .and_then(|v| format_number(v, NUMERIC_DECIMALS))
            .unwrap_or_else(|| value.to_string());
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    const ALL_TYPES: [ColumnType; 6] = [
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::Boolean,
        ColumnType::String,
        ColumnType::Date,
        ColumnType::Timestamp,
    ];

    fn has_two_decimals(s: &str) -> bool {
        match s.split_once('.') {
            Some((int_part, frac)) => {
                frac.len() == 2
                    && frac.chars().all(|c| c.is_ascii_digit())
                    && int_part
                        .trim_start_matches('-')
                        .chars()
                        .all(|c| c.is_ascii_digit() || c == ',')
            }
            None => false,
        }
    }

    #[test]
    fn null_for_every_type() {
        for ty in &ALL_TYPES {
            assert_eq!(format_value(&CellValue::Null, ty), "null");
        }
    }

    #[test]
    fn numeric_values() {
        assert_eq!(
            format_value(&CellValue::Float(10.5), &ColumnType::Float),
            "10.50"
        );
        assert_eq!(
            format_value(&CellValue::Integer(1234567), &ColumnType::Integer),
            "1,234,567.00"
        );
    }

    #[test]
    fn numeric_type_with_non_numeric_value_falls_back() {
        assert_eq!(
            format_value(&CellValue::Text("n/a".into()), &ColumnType::Float),
            "n/a"
        );
        assert_eq!(
            format_value(&CellValue::Float(f64::NAN), &ColumnType::Float),
            "NaN"
        );
    }

    #[test]
    fn timestamps_show_the_date_only() {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 15)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        assert_eq!(
            format_value(&CellValue::Timestamp(ts), &ColumnType::Timestamp),
            "2023-02-15"
        );
        assert_eq!(
            format_value(&CellValue::Text("soon".into()), &ColumnType::Date),
            "soon"
        );
    }

    #[test]
    fn other_types_use_plain_form() {
        assert_eq!(
            format_value(&CellValue::Boolean(true), &ColumnType::Boolean),
            "true"
        );
        assert_eq!(
            format_value(&CellValue::Text("Alice".into()), &ColumnType::String),
            "Alice"
        );
        // Numbers in a text column are not reformatted.
        assert_eq!(
            format_value(&CellValue::Float(2.5), &ColumnType::String),
            "2.5"
        );
    }

    proptest! {
        #[test]
        fn finite_floats_have_two_decimals(v in -1.0e12f64..1.0e12) {
            let out = format_value(&CellValue::Float(v), &ColumnType::Float);
            prop_assert!(has_two_decimals(&out), "{out}");
        }

        #[test]
        fn integers_have_two_decimals(v in -1_000_000_000_000i64..1_000_000_000_000) {
            let out = format_value(&CellValue::Integer(v), &ColumnType::Integer);
            prop_assert!(has_two_decimals(&out), "{out}");
        }

        #[test]
        fn dates_render_as_iso(days in 0i32..3_000_000) {
            let date = NaiveDate::from_num_days_from_ce_opt(days + 365_000).unwrap();
            for ty in [ColumnType::Date, ColumnType::Timestamp] {
                let out = format_value(&CellValue::Date(date), &ty);
                prop_assert_eq!(out.len(), 10);
                prop_assert_eq!(&out[4..5], "-");
                prop_assert_eq!(&out[7..8], "-");
                prop_assert_eq!(NaiveDate::parse_from_str(&out, "%Y-%m-%d").ok(), Some(date));
            }
        }
    }
}
