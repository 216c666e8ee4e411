//! Column declarations.
//!
//! Every column of a loaded table has exactly one [`ColumnDecl`]. The type is
//! assigned at load time by schema inference and may be narrowed once by the
//! date detector; after that it is final for the rest of the request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    String,
    Date,
    Timestamp,
    /// Any other engine type, carrying the engine's own name for it.
    Other(String),
}

impl ColumnType {
    /// Integer and floating point columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Date and timestamp columns.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Timestamp)
    }

    /// Columns eligible for date detection.
    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnType::String)
    }

    /// Label shown to users in the profile's `column_types`.
    pub fn label(&self) -> &str {
        match self {
            ColumnType::Integer => "Integer",
            ColumnType::Float => "Float",
            ColumnType::Boolean => "Boolean",
            ColumnType::String => "String",
            ColumnType::Date => "Date",
            ColumnType::Timestamp => "Timestamp",
            ColumnType::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name and type of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDecl {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnDecl {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}
