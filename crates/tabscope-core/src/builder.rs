//! Profile assembly.
//!
//! [`ProfileBuilder`] drives one request: load, date detection, then the
//! read-only aggregates over the final table. Stages run inside an
//! `info_span!("profile")` and each logs its duration.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use tabscope_common::{format_number, parse_f64};
use tabscope_engine::{Describe, Table, TableEngine};
use tabscope_ingest::Upload;
use tabscope_model::{ColumnDecl, Profile, ProfileResponse, Statistic};
use tracing::{info, info_span};

use crate::detector::coerce_date_columns;
use crate::error::ProfileError;
use crate::formatter::{NUMERIC_DECIMALS, format_value};
use crate::options::ProfileOptions;

/// Shown for statistics that do not apply to a column.
pub const NOT_APPLICABLE: &str = "N/A";

/// Shown for the sum of a numeric column without any value.
pub const NULL_SUM: &str = "null";

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Builds dataset profiles with an injected engine.
#[derive(Debug, Clone)]
pub struct ProfileBuilder<E> {
    engine: E,
    options: ProfileOptions,
}

impl<E: TableEngine> ProfileBuilder<E> {
    pub fn new(engine: E, options: ProfileOptions) -> Self {
        Self { engine, options }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Profiles an upload and wraps the outcome for the presentation layer.
    pub fn respond(&self, upload: Option<&Upload>) -> ProfileResponse {
        into_response(self.profile_upload(upload))
    }

    /// Profiles an uploaded file. `None` means the request carried no file.
    pub fn profile_upload(&self, upload: Option<&Upload>) -> Result<Profile> {
        let upload = upload.ok_or(ProfileError::NoFile)?;
        let span = info_span!("profile", upload = %upload.name());
        let _guard = span.enter();
        self.build_from_path(upload.path())
    }

    /// Profiles a CSV file on disk.
    pub fn profile_path(&self, path: &Path) -> Result<Profile> {
        let span = info_span!("profile", path = %path.display());
        let _guard = span.enter();
        self.build_from_path(path)
    }

    /// Profiles an already loaded table.
    pub fn profile_table(&self, table: Table) -> Result<Profile> {
        let span = info_span!("profile", columns = table.width());
        let _guard = span.enter();
        self.build(table)
    }

    fn build_from_path(&self, path: &Path) -> Result<Profile> {
        let table = info_span!("load").in_scope(|| -> Result<Table> {
            let start = Instant::now();
            let table = self.engine.load_csv(path, &self.options.load)?;
            info!(
                rows = table.height(),
                columns = table.width(),
                duration_ms = start.elapsed().as_millis(),
                "load complete"
            );
            Ok(table)
        })?;
        self.build(table)
    }

    fn build(&self, table: Table) -> Result<Profile> {
        let table = info_span!("detect_dates").in_scope(|| {
            let start = Instant::now();
            let (table, outcomes) = coerce_date_columns(&self.engine, table, &self.options);
            info!(
                columns = outcomes.len(),
                coerced = outcomes.iter().filter(|(_, o)| o.is_coerced()).count(),
                duration_ms = start.elapsed().as_millis(),
                "date detection complete"
            );
            table
        });

        if table.is_empty() {
            return Err(ProfileError::EmptyDataset);
        }

        let schema = table.schema();
        let columns: Vec<String> = schema.iter().map(|decl| decl.name.clone()).collect();
        let column_types: BTreeMap<String, String> = schema
            .iter()
            .map(|decl| (decl.name.clone(), decl.column_type.label().to_string()))
            .collect();

        let description = info_span!("describe").in_scope(|| -> Result<Vec<Vec<String>>> {
            let start = Instant::now();
            let describe = self.engine.describe(&table)?;
            let rows = description_rows(&describe, &schema);
            info!(
                described = describe.len(),
                duration_ms = start.elapsed().as_millis(),
                "describe complete"
            );
            Ok(rows)
        })?;

        let top_20 = info_span!("sample").in_scope(|| -> Result<Vec<BTreeMap<String, String>>> {
            let start = Instant::now();
            let rows = self.engine.head_rows(&table, self.options.sample_rows)?;
            let sample: Vec<BTreeMap<String, String>> = rows
                .iter()
                .map(|row| {
                    schema
                        .iter()
                        .zip(row)
                        .map(|(decl, cell)| (decl.name.clone(), format_value(cell, &decl.column_type)))
                        .collect()
                })
                .collect();
            info!(
                rows = sample.len(),
                duration_ms = start.elapsed().as_millis(),
                "sample complete"
            );
            Ok(sample)
        })?;

        let sum = info_span!("sums").in_scope(|| -> Result<BTreeMap<String, String>> {
            let start = Instant::now();
            let numeric: Vec<String> = schema
                .iter()
                .filter(|decl| decl.column_type.is_numeric())
                .map(|decl| decl.name.clone())
                .collect();
            let sums = self.engine.sums(&table, &numeric)?;
            let rendered: BTreeMap<String, String> = sums
                .into_iter()
                .map(|(name, total)| (name, render_sum(total)))
                .collect();
            info!(
                columns = rendered.len(),
                duration_ms = start.elapsed().as_millis(),
                "sums complete"
            );
            Ok(rendered)
        })?;

        let null_counts = info_span!("null_counts").in_scope(|| -> Result<BTreeMap<String, usize>> {
            let start = Instant::now();
            let counts = self.engine.null_counts(&table)?;
            info!(
                total_nulls = counts.values().sum::<usize>(),
                duration_ms = start.elapsed().as_millis(),
                "null counts complete"
            );
            Ok(counts)
        })?;

        Ok(Profile {
            columns,
            column_types,
            description,
            top_20,
            sum,
            null_counts,
        })
    }
}

/// Wraps a profile build outcome in the response envelope.
pub fn into_response(result: Result<Profile>) -> ProfileResponse {
    match result {
        Ok(profile) => ProfileResponse::from(profile),
        Err(err) => ProfileResponse::from(err),
    }
}

impl From<ProfileError> for ProfileResponse {
    fn from(err: ProfileError) -> Self {
        ProfileResponse::error(err.to_string())
    }
}

/// One row per statistic: its label, then one cell per column.
///
/// Numeric columns show the engine's value at two decimals. Every other
/// column, and any statistic the engine did not produce, shows `N/A`.
fn description_rows(describe: &Describe, schema: &[ColumnDecl]) -> Vec<Vec<String>> {
    Statistic::ALL
        .iter()
        .map(|&statistic| {
            let mut row = Vec::with_capacity(schema.len() + 1);
            row.push(statistic.as_str().to_string());
            row.extend(schema.iter().map(|decl| {
                if !decl.column_type.is_numeric() {
                    return NOT_APPLICABLE.to_string();
                }
                describe
                    .get(&decl.name, statistic)
                    .and_then(parse_f64)
                    .and_then(|v| format_number(v, NUMERIC_DECIMALS))
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string())
            }));
            row
        })
        .collect()
}

fn render_sum(total: Option<f64>) -> String {
    match total {
        Some(v) => format_number(v, NUMERIC_DECIMALS).unwrap_or_else(|| v.to_string()),
        None => NULL_SUM.to_string(),
    }
}
