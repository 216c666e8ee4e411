//! End-to-end profiles of uploaded CSV files.

use std::collections::BTreeMap;
use std::path::Path;

use tabscope_core::{ProfileBuilder, ProfileError, ProfileOptions};
use tabscope_engine::{
    DateFormat, Describe, EngineError, ParsedColumn, PolarsEngine, Table, TableEngine,
};
use tabscope_ingest::{LoadOptions, Upload};
use tabscope_model::{CellValue, ProfileResponse, Statistic};

const CUSTOMERS: &str =
    "id,name,amount,signup_date\n1,Alice,10.5,2023-01-01\n2,Bob,20.25,2023-02-15\n";

fn builder() -> ProfileBuilder<PolarsEngine> {
    ProfileBuilder::new(PolarsEngine::new(), ProfileOptions::default())
}

fn upload(content: &str) -> Upload {
    Upload::from_bytes("upload.csv", content.as_bytes()).unwrap()
}

#[test]
fn customers_profile() {
    let upload = upload(CUSTOMERS);
    let profile = builder().profile_upload(Some(&upload)).unwrap();

    assert_eq!(profile.columns, ["id", "name", "amount", "signup_date"]);
    assert_eq!(profile.column_types["signup_date"], "Date");
    assert_eq!(profile.column_types["id"], "Integer");
    assert_eq!(profile.sum["amount"], "30.75");
    assert_eq!(profile.sum["id"], "3.00");
    assert!(!profile.sum.contains_key("name"));
    assert!(profile.null_counts.values().all(|&n| n == 0));
    assert_eq!(profile.null_counts.len(), 4);

    assert_eq!(profile.sample_len(), 2);
    assert_eq!(profile.top_20[0]["signup_date"], "2023-01-01");
    assert_eq!(profile.top_20[1]["signup_date"], "2023-02-15");
    assert_eq!(profile.top_20[0]["amount"], "10.50");
    assert_eq!(profile.top_20[1]["name"], "Bob");

    assert_eq!(profile.statistic(Statistic::Count, "amount"), Some("2.00"));
    assert_eq!(profile.statistic(Statistic::Mean, "amount"), Some("15.38"));
    assert_eq!(profile.statistic(Statistic::Min, "name"), Some("N/A"));
    assert_eq!(profile.statistic(Statistic::Max, "signup_date"), Some("N/A"));
}

#[test]
fn customers_response_snapshot() {
    let upload = upload(CUSTOMERS);
    let response = builder().respond(Some(&upload));
    insta::assert_json_snapshot!(response, @r#"
    {
      "columns": [
        "id",
        "name",
        "amount",
        "signup_date"
      ],
      "column_types": {
        "amount": "Float",
        "id": "Integer",
        "name": "String",
        "signup_date": "Date"
      },
      "description": [
        [
          "count",
          "2.00",
          "N/A",
          "2.00",
          "N/A"
        ],
        [
          "mean",
          "1.50",
          "N/A",
          "15.38",
          "N/A"
        ],
        [
          "stddev",
          "0.71",
          "N/A",
          "6.89",
          "N/A"
        ],
        [
          "min",
          "1.00",
          "N/A",
          "10.50",
          "N/A"
        ],
        [
          "max",
          "2.00",
          "N/A",
          "20.25",
          "N/A"
        ]
      ],
      "top_20": [
        {
          "amount": "10.50",
          "id": "1.00",
          "name": "Alice",
          "signup_date": "2023-01-01"
        },
        {
          "amount": "20.25",
          "id": "2.00",
          "name": "Bob",
          "signup_date": "2023-02-15"
        }
      ],
      "sum": {
        "amount": "30.75",
        "id": "3.00"
      },
      "null_counts": {
        "amount": 0,
        "id": 0,
        "name": 0,
        "signup_date": 0
      }
    }
    "#);
}

#[test]
fn header_only_file_is_empty() {
    let upload = upload("id,name,amount\n");
    let response = builder().respond(Some(&upload));
    insta::assert_json_snapshot!(response, @r#"
    {
      "error": "The uploaded dataset is empty."
    }
    "#);
}

#[test]
fn missing_file_has_its_own_message() {
    let response = builder().respond(None);
    insta::assert_json_snapshot!(response, @r#"
    {
      "error": "No file was uploaded."
    }
    "#);
    assert_ne!(
        response.error_message(),
        Some(ProfileError::EmptyDataset.to_string().as_str())
    );
}

#[test]
fn blank_uploads_are_empty() {
    for content in ["", "  \n\n"] {
        let upload = upload(content);
        let err = builder().profile_upload(Some(&upload)).unwrap_err();
        assert_eq!(err, ProfileError::EmptyDataset, "{content:?}");
    }
}

#[test]
fn upload_temp_file_outlives_profile_only_as_long_as_upload() {
    let upload = upload(CUSTOMERS);
    let path = upload.path().to_path_buf();
    let response = builder().respond(Some(&upload));
    assert!(!response.is_error());
    assert!(path.exists());
    drop(upload);
    assert!(!path.exists());
}

#[test]
fn all_null_numeric_column_sums_to_null() {
    let upload = upload("a,b,score\n1,x,\n2,y,\n");
    let options = ProfileOptions::default()
        .with_load_options(LoadOptions::default().with_infer_schema_length(Some(10)));
    let builder = ProfileBuilder::new(PolarsEngine::new(), options);
    let profile = builder.profile_upload(Some(&upload)).unwrap();

    assert_eq!(profile.null_counts["score"], 2);
    assert_eq!(profile.sum["a"], "3.00");
    assert_eq!(profile.top_20[0]["score"], "null");
}

#[test]
fn sample_is_limited() {
    let mut csv = String::from("n\n");
    for i in 0..30 {
        csv.push_str(&format!("{i}\n"));
    }
    let upload = upload(&csv);
    let profile = builder().profile_upload(Some(&upload)).unwrap();
    assert_eq!(profile.sample_len(), 20);
    assert_eq!(profile.top_20[19]["n"], "19.00");
    assert_eq!(profile.sum["n"], "435.00");

    let narrow = ProfileBuilder::new(
        PolarsEngine::new(),
        ProfileOptions::default().with_sample_rows(5),
    );
    assert_eq!(narrow.profile_upload(Some(&upload)).unwrap().sample_len(), 5);
}

#[test]
fn large_sums_are_grouped() {
    let upload = upload("v\n1000000\n234567.5\n");
    let profile = builder().profile_upload(Some(&upload)).unwrap();
    assert_eq!(profile.sum["v"], "1,234,567.50");
}

#[test]
fn profile_path_reads_in_place() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), CUSTOMERS).unwrap();
    let profile = builder().profile_path(file.path()).unwrap();
    assert_eq!(profile.columns.len(), 4);
    assert!(file.path().exists());
}

#[test]
fn missing_path_is_a_processing_error() {
    let err = builder()
        .profile_path(Path::new("/no/such/dir/data.csv"))
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Processing("file not found: /no/such/dir/data.csv".to_string())
    );
}

/// Delegates to Polars but cannot compute sums.
struct NoSums;

impl TableEngine for NoSums {
    fn load_csv(&self, path: &Path, options: &LoadOptions) -> tabscope_engine::Result<Table> {
        PolarsEngine.load_csv(path, options)
    }

    fn head_values(
        &self,
        table: &Table,
        column: &str,
        limit: usize,
    ) -> tabscope_engine::Result<Vec<CellValue>> {
        PolarsEngine.head_values(table, column, limit)
    }

    fn parse_dates(
        &self,
        table: &Table,
        column: &str,
        format: &DateFormat,
    ) -> tabscope_engine::Result<ParsedColumn> {
        PolarsEngine.parse_dates(table, column, format)
    }

    fn describe(&self, table: &Table) -> tabscope_engine::Result<Describe> {
        PolarsEngine.describe(table)
    }

    fn head_rows(&self, table: &Table, limit: usize) -> tabscope_engine::Result<Vec<Vec<CellValue>>> {
        PolarsEngine.head_rows(table, limit)
    }

    fn sums(
        &self,
        _table: &Table,
        columns: &[String],
    ) -> tabscope_engine::Result<BTreeMap<String, Option<f64>>> {
        Err(EngineError::ColumnNotFound {
            column: columns.first().cloned().unwrap_or_default(),
        })
    }

    fn null_counts(&self, table: &Table) -> tabscope_engine::Result<BTreeMap<String, usize>> {
        PolarsEngine.null_counts(table)
    }
}

#[test]
fn aggregation_failure_replaces_the_whole_profile() {
    let upload = upload(CUSTOMERS);
    let response = ProfileBuilder::new(NoSums, ProfileOptions::default()).respond(Some(&upload));
    assert_eq!(
        response,
        ProfileResponse::error("An unexpected error occurred: column 'id' not found")
    );
}
