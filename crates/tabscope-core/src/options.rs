//! Profile configuration.

use tabscope_engine::DateFormat;
use tabscope_ingest::LoadOptions;

use crate::detector::DateAcceptance;

/// Rows shown in a profile's sample.
pub const DEFAULT_SAMPLE_ROWS: usize = 20;

/// Leading values inspected before date parsing is attempted on a column.
pub const DEFAULT_DETECTION_SAMPLE: usize = 10;

/// Settings for one profile build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Number of leading rows in the sample.
    pub sample_rows: usize,
    /// Number of leading values checked for text before a column is parsed.
    ///
    /// Only the head of the column is inspected, so text that appears later
    /// in a sorted or partitioned file is missed.
    pub detection_sample: usize,
    /// Date formats tried in order.
    pub date_formats: Vec<DateFormat>,
    pub acceptance: DateAcceptance,
    pub load: LoadOptions,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            detection_sample: DEFAULT_DETECTION_SAMPLE,
            date_formats: DateFormat::DEFAULT_CANDIDATES.to_vec(),
            acceptance: DateAcceptance::default(),
            load: LoadOptions::default(),
        }
    }
}

impl ProfileOptions {
    #[must_use]
    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    #[must_use]
    pub fn with_detection_sample(mut self, values: usize) -> Self {
        self.detection_sample = values;
        self
    }

    /// Replaces the candidate date formats. An empty list disables detection.
    #[must_use]
    pub fn with_date_formats(mut self, formats: Vec<DateFormat>) -> Self {
        self.date_formats = formats;
        self
    }

    #[must_use]
    pub fn with_acceptance(mut self, acceptance: DateAcceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    #[must_use]
    pub fn with_load_options(mut self, load: LoadOptions) -> Self {
        self.load = load;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ProfileOptions::default();
        assert_eq!(options.sample_rows, 20);
        assert_eq!(options.detection_sample, 10);
        assert_eq!(options.date_formats.len(), 4);
        assert_eq!(options.acceptance, DateAcceptance::AnyMatch);
        assert!(!options.load.try_parse_dates);
    }
}
