//! CLI argument definitions for tabscope.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabscope_core::{DEFAULT_DETECTION_SAMPLE, DEFAULT_SAMPLE_ROWS, DateAcceptance};
use tabscope_ingest::MAX_CSV_FILE_SIZE;

#[derive(Parser)]
#[command(
    name = "tabscope",
    version,
    about = "Profile CSV datasets",
    long_about = "Profile a CSV dataset: column types, summary statistics, a sample of \
                  rows, sums of numeric columns, and null counts.\n\n\
                  Text columns that hold dates are detected and converted first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile a CSV file.
    Profile(ProfileArgs),

    /// List the default date formats in detection order.
    Formats,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV file with a header row; `-` reads standard input.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How to print the profile.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    /// Number of leading rows in the sample.
    #[arg(long = "sample-rows", value_name = "N", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,

    /// Leading values checked for text before date parsing is tried.
    #[arg(
        long = "detection-sample",
        value_name = "N",
        default_value_t = DEFAULT_DETECTION_SAMPLE
    )]
    pub detection_sample: usize,

    /// Date format to try, e.g. `dd.MM.yyyy` (repeatable, replaces the defaults).
    #[arg(long = "date-format", value_name = "PATTERN")]
    pub date_formats: Vec<String>,

    /// When a date format is good enough to convert a column.
    #[arg(long = "date-acceptance", value_enum, default_value = "any")]
    pub date_acceptance: DateAcceptanceArg,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CSV_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI date acceptance choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DateAcceptanceArg {
    /// Convert when any value parses; the rest become null.
    Any,
    /// Convert when more than half of the values parse.
    Majority,
    /// Convert only when every value parses.
    Complete,
}

impl From<DateAcceptanceArg> for DateAcceptance {
    fn from(arg: DateAcceptanceArg) -> Self {
        match arg {
            DateAcceptanceArg::Any => DateAcceptance::AnyMatch,
            DateAcceptanceArg::Majority => DateAcceptance::Majority,
            DateAcceptanceArg::Complete => DateAcceptance::Complete,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
