//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, normalize_header, read_csv_schema};
pub use reader::{
    DEFAULT_INFER_SCHEMA_LENGTH, LoadOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit,
    read_csv_table, validate_dataframe_shape, validate_encoding,
};
