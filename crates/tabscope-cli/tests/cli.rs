//! Argument parsing and profile commands.

use clap::Parser;
use tabscope_cli::cli::{Cli, Command, DateAcceptanceArg, OutputFormatArg, ProfileArgs};
use tabscope_cli::commands::{profile_options, run_profile};
use tabscope_cli::summary::{description_table, sample_table, schema_table};
use tabscope_core::DateAcceptance;
use tempfile::NamedTempFile;

fn profile_args(args: &[&str]) -> ProfileArgs {
    let mut argv = vec!["tabscope", "profile"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Profile(args) => args,
        Command::Formats => panic!("expected profile command"),
    }
}

fn csv_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

#[test]
fn profile_defaults() {
    let args = profile_args(&["data.csv"]);
    assert_eq!(args.output, OutputFormatArg::Table);
    assert_eq!(args.sample_rows, 20);
    assert_eq!(args.detection_sample, 10);
    assert_eq!(args.date_acceptance, DateAcceptanceArg::Any);
    assert!(args.date_formats.is_empty());

    let options = profile_options(&args).unwrap();
    assert_eq!(options.date_formats.len(), 4);
    assert_eq!(options.acceptance, DateAcceptance::AnyMatch);
}

#[test]
fn profile_flags_map_to_options() {
    let args = profile_args(&[
        "data.csv",
        "--output",
        "json",
        "--sample-rows",
        "5",
        "--date-format",
        "dd.MM.yyyy",
        "--date-format",
        "yyyy-MM-dd",
        "--date-acceptance",
        "complete",
        "--max-file-size",
        "1024",
    ]);
    let options = profile_options(&args).unwrap();

    assert_eq!(args.output, OutputFormatArg::Json);
    assert_eq!(options.sample_rows, 5);
    assert_eq!(options.acceptance, DateAcceptance::Complete);
    assert_eq!(options.load.max_file_size, 1024);
    let patterns: Vec<&str> = options.date_formats.iter().map(|f| f.pattern()).collect();
    assert_eq!(patterns, ["dd.MM.yyyy", "yyyy-MM-dd"]);
}

#[test]
fn invalid_date_format_is_an_argument_error() {
    let args = profile_args(&["data.csv", "--date-format", "yyyy-MM"]);
    let err = run_profile(&args).unwrap_err();
    assert!(format!("{err:#}").contains("yyyy-MM"));
}

#[test]
fn missing_input_reports_no_file() {
    let args = profile_args(&[]);
    let response = run_profile(&args).unwrap();
    assert_eq!(response.error_message(), Some("No file was uploaded."));
}

#[test]
fn unreadable_input_is_a_processing_error() {
    let args = profile_args(&["/no/such/file.csv"]);
    let response = run_profile(&args).unwrap();
    let message = response.error_message().unwrap();
    assert!(message.starts_with("An unexpected error occurred: file not found"));
}

#[test]
fn profile_json_round_trips() {
    let file = csv_file("id,joined\n1,01/31/2023\n2,02/28/2023\n");
    let path = file.path().to_str().unwrap();
    let args = profile_args(&[path, "--output", "json"]);
    let response = run_profile(&args).unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["column_types"]["joined"], "Date");
    assert_eq!(json["top_20"][0]["joined"], "2023-01-31");
    assert_eq!(json["sum"]["id"], "3.00");
}

#[test]
fn tables_show_profile_values() {
    let file = csv_file("id,name,amount\n1,Alice,10.5\n2,,20.25\n");
    let args = profile_args(&[file.path().to_str().unwrap()]);
    let response = run_profile(&args).unwrap();
    let profile = response.profile().unwrap();

    let schema = schema_table(profile).to_string();
    assert!(schema.contains("amount"));
    assert!(schema.contains("30.75"));
    assert!(schema.contains("Float"));

    let description = description_table(profile).to_string();
    assert!(description.contains("stddev"));
    assert!(description.contains("15.38"));

    let sample = sample_table(profile).to_string();
    assert!(sample.contains("Alice"));
    assert!(sample.contains("null"));
}
