//! [`TableEngine`] backed by Polars.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::*;
use tabscope_common::{any_to_cell, any_to_count, any_to_f64, any_to_string};
use tabscope_ingest::{LoadOptions, read_csv_table};
use tabscope_model::{CellValue, Statistic};
use tracing::debug;

use crate::date_format::DateFormat;
use crate::describe::{ColumnStats, Describe};
use crate::engine::{ParsedColumn, TableEngine};
use crate::error::{EngineError, Result};
use crate::table::{Table, column_type_of};

/// Runs table operations on Polars DataFrames.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarsEngine;

impl PolarsEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TableEngine for PolarsEngine {
    fn load_csv(&self, path: &Path, options: &LoadOptions) -> Result<Table> {
        let (df, headers) = read_csv_table(path, options)?;
        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = df.height(),
            "table loaded"
        );
        Ok(Table::new(df))
    }

    fn head_values(&self, table: &Table, column: &str, limit: usize) -> Result<Vec<CellValue>> {
        let source = table.column(column)?;
        let len = source.len().min(limit);
        let mut values = Vec::with_capacity(len);
        for idx in 0..len {
            values.push(any_to_cell(source.get(idx)?));
        }
        Ok(values)
    }

    fn parse_dates(
        &self,
        table: &Table,
        column: &str,
        format: &DateFormat,
    ) -> Result<ParsedColumn> {
        let source = table.column(column)?;
        if source.dtype() != &DataType::String {
            return Err(EngineError::NotTextual {
                column: column.to_string(),
                dtype: source.dtype().to_string(),
            });
        }

        let options = StrptimeOptions {
            format: Some(PlSmallStr::from(format.strptime())),
            strict: false,
            exact: true,
            cache: true,
        };
        let parsed_df = table
            .data()
            .clone()
            .lazy()
            .select([col(column).str().to_date(options).alias(column)])
            .collect()?;
        let parsed = parsed_df.column(column)?.clone();

        Ok(ParsedColumn {
            parsed: parsed.len() - parsed.null_count(),
            non_null_source: source.len() - source.null_count(),
            column: parsed,
        })
    }

    fn describe(&self, table: &Table) -> Result<Describe> {
        let described: Vec<(String, bool)> = table
            .schema()
            .into_iter()
            .filter(|decl| decl.column_type.is_numeric() || decl.column_type.is_textual())
            .map(|decl| (decl.name, decl.column_type.is_numeric()))
            .collect();
        if described.is_empty() {
            return Ok(Describe::default());
        }

        let mut exprs = Vec::with_capacity(described.len() * 5);
        for (idx, (name, numeric)) in described.iter().enumerate() {
            exprs.push(col(name.as_str()).count().alias(stat_key(idx, Statistic::Count)));
            if *numeric {
                let values = col(name.as_str()).cast(DataType::Float64);
                exprs.push(values.clone().mean().alias(stat_key(idx, Statistic::Mean)));
                exprs.push(values.std(1).alias(stat_key(idx, Statistic::StdDev)));
            }
            exprs.push(col(name.as_str()).min().alias(stat_key(idx, Statistic::Min)));
            exprs.push(col(name.as_str()).max().alias(stat_key(idx, Statistic::Max)));
        }
        let summary = table.data().clone().lazy().select(exprs).collect()?;

        let mut describe = Describe::default();
        for (idx, (name, numeric)) in described.into_iter().enumerate() {
            let value = |statistic: Statistic| first_value(&summary, &stat_key(idx, statistic));
            let mut stats = ColumnStats::default();
            stats.set(
                Statistic::Count,
                any_to_count(value(Statistic::Count)?).map(|n| n.to_string()),
            );
            if numeric {
                for statistic in [Statistic::Mean, Statistic::StdDev] {
                    let v = any_to_f64(value(statistic)?).filter(|v| v.is_finite());
                    stats.set(statistic, v.map(|v| v.to_string()));
                }
            }
            for statistic in [Statistic::Min, Statistic::Max] {
                stats.set(statistic, non_null_string(value(statistic)?));
            }
            describe.insert(name, stats);
        }
        Ok(describe)
    }

    fn head_rows(&self, table: &Table, limit: usize) -> Result<Vec<Vec<CellValue>>> {
        let head = table.data().head(Some(limit));
        let mut rows = Vec::with_capacity(head.height());
        for row in 0..head.height() {
            let mut cells = Vec::with_capacity(head.width());
            for column in head.get_columns() {
                cells.push(any_to_cell(column.get(row)?));
            }
            rows.push(cells);
        }
        Ok(rows)
    }

    fn sums(&self, table: &Table, columns: &[String]) -> Result<BTreeMap<String, Option<f64>>> {
        if columns.is_empty() {
            return Ok(BTreeMap::new());
        }
        let mut exprs = Vec::with_capacity(columns.len() * 2);
        for (idx, name) in columns.iter().enumerate() {
            let dtype = table.column(name)?.dtype();
            if !column_type_of(dtype).is_numeric() {
                debug!(column = %name, dtype = %dtype, "summing non-numeric column");
            }
            let values = col(name.as_str()).cast(DataType::Float64);
            exprs.push(values.clone().sum().alias(format!("{idx}_sum")));
            exprs.push(values.count().alias(format!("{idx}_count")));
        }
        let totals = table.data().clone().lazy().select(exprs).collect()?;

        let mut sums = BTreeMap::new();
        for (idx, name) in columns.iter().enumerate() {
            let count = any_to_count(first_value(&totals, &format!("{idx}_count"))?);
            let sum = match count {
                Some(n) if n > 0 => any_to_f64(first_value(&totals, &format!("{idx}_sum"))?),
                _ => None,
            };
            sums.insert(name.clone(), sum);
        }
        Ok(sums)
    }

    fn null_counts(&self, table: &Table) -> Result<BTreeMap<String, usize>> {
        Ok(table
            .data()
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect())
    }
}

fn stat_key(idx: usize, statistic: Statistic) -> String {
    format!("{idx}_{statistic}")
}

/// First row of a single-row aggregation result.
fn first_value<'a>(df: &'a DataFrame, key: &str) -> Result<AnyValue<'a>> {
    Ok(df.column(key)?.get(0)?)
}

fn non_null_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}
