//! Loaded tables.
//!
//! A [`Table`] wraps a Polars DataFrame for the duration of one request.
//! Updates are functional: [`Table::with_column`] returns a new table and
//! leaves the receiver untouched.

use polars::prelude::{Column, DataFrame, DataType};
use tabscope_model::{ColumnDecl, ColumnType};

use crate::error::{EngineError, Result};

/// Ordered, named, typed columns with unique names.
#[derive(Debug, Clone)]
pub struct Table {
    data: DataFrame,
}

impl Table {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// The underlying DataFrame.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Declared type of every column, in table order.
    pub fn schema(&self) -> Vec<ColumnDecl> {
        self.data
            .get_columns()
            .iter()
            .map(|c| ColumnDecl::new(c.name().as_str(), column_type_of(c.dtype())))
            .collect()
    }

    /// Declared type of one column.
    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        Ok(column_type_of(self.column(name)?.dtype()))
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.data
            .column(name)
            .map_err(|_| EngineError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Returns a copy of this table with the column of the same name replaced.
    ///
    /// The replacement keeps the original column's position. Replacing a
    /// column that does not exist is an error.
    pub fn with_column(&self, column: Column) -> Result<Table> {
        self.column(column.name().as_str())?;
        let mut data = self.data.clone();
        data.with_column(column)?;
        Ok(Table::new(data))
    }
}

impl From<DataFrame> for Table {
    fn from(data: DataFrame) -> Self {
        Table::new(data)
    }
}

/// Maps a Polars data type onto the profile's column types.
pub fn column_type_of(dtype: &DataType) -> ColumnType {
    match dtype {
        dt if dt.is_integer() => ColumnType::Integer,
        dt if dt.is_float() => ColumnType::Float,
        DataType::Boolean => ColumnType::Boolean,
        DataType::String => ColumnType::String,
        DataType::Date => ColumnType::Date,
        DataType::Datetime(_, _) => ColumnType::Timestamp,
        other => ColumnType::Other(other.to_string()),
    }
}
