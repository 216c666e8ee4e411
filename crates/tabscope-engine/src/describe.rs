//! Summary statistics computed by the engine.

use std::collections::BTreeMap;

use tabscope_model::Statistic;

/// Raw summary statistics, one entry per described column.
///
/// Values are the engine's own string forms; rendering for display happens
/// later. A statistic the engine could not compute for a column (mean of a
/// text column, stddev of a single value) is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Describe {
    columns: BTreeMap<String, ColumnStats>,
}

/// Statistics of one column, indexed by [`Statistic`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStats {
    values: [Option<String>; 5],
}

impl ColumnStats {
    pub fn get(&self, statistic: Statistic) -> Option<&str> {
        self.values[index(statistic)].as_deref()
    }

    pub fn set(&mut self, statistic: Statistic, value: Option<String>) {
        self.values[index(statistic)] = value;
    }
}

fn index(statistic: Statistic) -> usize {
    match statistic {
        Statistic::Count => 0,
        Statistic::Mean => 1,
        Statistic::StdDev => 2,
        Statistic::Min => 3,
        Statistic::Max => 4,
    }
}

impl Describe {
    pub fn insert(&mut self, column: impl Into<String>, stats: ColumnStats) {
        self.columns.insert(column.into(), stats);
    }

    /// Statistics of `column`, if it was described.
    pub fn column(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.get(column)
    }

    /// Looks up one statistic of one column.
    pub fn get(&self, column: &str, statistic: Statistic) -> Option<&str> {
        self.column(column)?.get(statistic)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
