//! Behaviour of the Polars engine on small CSV files.

use std::io::Write;

use chrono::NaiveDate;
use tabscope_engine::{DateFormat, EngineError, PolarsEngine, Table, TableEngine};
use tabscope_ingest::LoadOptions;
use tabscope_model::{CellValue, ColumnType, Statistic};
use tempfile::NamedTempFile;

fn load(content: &str) -> Table {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    PolarsEngine
        .load_csv(file.path(), &LoadOptions::default())
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> CellValue {
    CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

const CUSTOMERS: &str =
    "id,name,amount,signup_date\n1,Alice,10.5,2023-01-01\n2,Bob,20.25,2023-02-15\n";

#[test]
fn load_infers_types_and_leaves_dates_as_text() {
    let table = load(CUSTOMERS);
    let types: Vec<ColumnType> = table.schema().into_iter().map(|d| d.column_type).collect();
    assert_eq!(
        types,
        [
            ColumnType::Integer,
            ColumnType::String,
            ColumnType::Float,
            ColumnType::String
        ]
    );
}

#[test]
fn head_values_respects_limit_and_order() {
    let table = load("k,v\n1,a\n2,\n3,c\n4,d\n");
    let values = PolarsEngine.head_values(&table, "v", 3).unwrap();
    assert_eq!(
        values,
        [
            CellValue::Text("a".into()),
            CellValue::Null,
            CellValue::Text("c".into())
        ]
    );
    assert!(matches!(
        PolarsEngine.head_values(&table, "missing", 3),
        Err(EngineError::ColumnNotFound { .. })
    ));
}

#[test]
fn parse_dates_nulls_unmatched_rows() {
    let table = load("d\nhello\nworld\n2023-01-01\n");
    let parsed = PolarsEngine
        .parse_dates(&table, "d", &DateFormat::ISO)
        .unwrap();
    assert_eq!(parsed.name(), "d");
    assert_eq!(parsed.parsed, 1);
    assert_eq!(parsed.non_null_source, 3);
    assert_eq!(parsed.unparsed(), 2);

    let table = PolarsEngine.replace_column(&table, parsed).unwrap();
    assert_eq!(table.column_type("d").unwrap(), ColumnType::Date);
    assert_eq!(
        PolarsEngine.head_values(&table, "d", 10).unwrap(),
        [CellValue::Null, CellValue::Null, date(2023, 1, 1)]
    );
}

#[test]
fn parse_dates_with_wrong_format_parses_nothing() {
    let table = load("d\n01/31/2023\n02/01/2023\n");
    let iso = PolarsEngine
        .parse_dates(&table, "d", &DateFormat::ISO)
        .unwrap();
    assert!(!iso.any_parsed());

    let us = PolarsEngine
        .parse_dates(&table, "d", &DateFormat::US)
        .unwrap();
    assert_eq!(us.parsed, 2);
}

#[test]
fn parse_dates_requires_text() {
    let table = load(CUSTOMERS);
    let err = PolarsEngine
        .parse_dates(&table, "id", &DateFormat::ISO)
        .unwrap_err();
    assert!(matches!(err, EngineError::NotTextual { .. }));
}

#[test]
fn replace_column_keeps_column_order() {
    let table = load(CUSTOMERS);
    let parsed = PolarsEngine
        .parse_dates(&table, "signup_date", &DateFormat::ISO)
        .unwrap();
    let table = PolarsEngine.replace_column(&table, parsed).unwrap();
    assert_eq!(table.column_names(), ["id", "name", "amount", "signup_date"]);
}

#[test]
fn describe_numeric_and_text_columns() {
    let table = load(CUSTOMERS);
    let describe = PolarsEngine.describe(&table).unwrap();

    assert_eq!(describe.get("amount", Statistic::Count), Some("2"));
    assert_eq!(describe.get("amount", Statistic::Mean), Some("15.375"));
    assert_eq!(describe.get("amount", Statistic::Min), Some("10.5"));
    assert_eq!(describe.get("amount", Statistic::Max), Some("20.25"));
    let stddev: f64 = describe
        .get("amount", Statistic::StdDev)
        .unwrap()
        .parse()
        .unwrap();
    assert!((stddev - 6.894_291_117).abs() < 1e-6);

    assert_eq!(describe.get("name", Statistic::Count), Some("2"));
    assert_eq!(describe.get("name", Statistic::Mean), None);
    assert_eq!(describe.get("name", Statistic::Min), Some("Alice"));
    assert_eq!(describe.get("name", Statistic::Max), Some("Bob"));
}

#[test]
fn describe_skips_date_columns() {
    let table = load(CUSTOMERS);
    let parsed = PolarsEngine
        .parse_dates(&table, "signup_date", &DateFormat::ISO)
        .unwrap();
    let table = PolarsEngine.replace_column(&table, parsed).unwrap();
    let describe = PolarsEngine.describe(&table).unwrap();
    assert!(!describe.contains("signup_date"));
    assert_eq!(describe.len(), 3);
}

#[test]
fn head_rows_in_column_order() {
    let table = load(CUSTOMERS);
    let rows = PolarsEngine.head_rows(&table, 20).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        [
            CellValue::Integer(1),
            CellValue::Text("Alice".into()),
            CellValue::Float(10.5),
            CellValue::Text("2023-01-01".into()),
        ]
    );

    assert_eq!(PolarsEngine.head_rows(&table, 1).unwrap().len(), 1);
}

#[test]
fn sums_and_all_null_columns() {
    let table = load("a,b,c\n1,,x\n2,,y\n");
    let columns = vec!["a".to_string(), "b".to_string()];
    let sums = PolarsEngine.sums(&table, &columns).unwrap();
    assert_eq!(sums["a"], Some(3.0));
    assert_eq!(sums["b"], None);
    assert!(PolarsEngine.sums(&table, &[]).unwrap().is_empty());
}

#[test]
fn null_counts_every_column() {
    let table = load("a,b\n1,\n,\n3,x\n");
    let counts = PolarsEngine.null_counts(&table).unwrap();
    assert_eq!(counts["a"], 1);
    assert_eq!(counts["b"], 2);
}
