//! The profile handed to the presentation layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary statistics reported per column, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Count,
    Mean,
    StdDev,
    Min,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::StdDev,
        Statistic::Min,
        Statistic::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::StdDev => "stddev",
            Statistic::Min => "min",
            Statistic::Max => "max",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready summary of one dataset.
///
/// Built once per request and never modified afterwards. `columns` carries the
/// column order; the maps are keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub columns: Vec<String>,
    pub column_types: BTreeMap<String, String>,
    /// One row per [`Statistic`]: the statistic label followed by one cell per
    /// entry of `columns`.
    pub description: Vec<Vec<String>>,
    pub top_20: Vec<BTreeMap<String, String>>,
    /// Numeric columns only.
    pub sum: BTreeMap<String, String>,
    pub null_counts: BTreeMap<String, usize>,
}

impl Profile {
    /// Cell of the description table for `statistic` and `column`.
    pub fn statistic(&self, statistic: Statistic, column: &str) -> Option<&str> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.description
            .iter()
            .find(|row| row.first().map(String::as_str) == Some(statistic.as_str()))
            .and_then(|row| row.get(col_idx + 1))
            .map(String::as_str)
    }

    pub fn sample_len(&self) -> usize {
        self.top_20.len()
    }
}

/// What the presentation layer receives: a full profile or a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Profile(Profile),
    Error { error: String },
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        ProfileResponse::Profile(profile)
    }
}

impl ProfileResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ProfileResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProfileResponse::Error { .. })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileResponse::Profile(profile) => Some(profile),
            ProfileResponse::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProfileResponse::Profile(_) => None,
            ProfileResponse::Error { error } => Some(error),
        }
    }
}
