//! Subcommand implementations.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tabscope_core::{ProfileBuilder, ProfileError, ProfileOptions};
use tabscope_engine::{DateFormat, PolarsEngine};
use tabscope_ingest::{LoadOptions, Upload};
use tabscope_model::ProfileResponse;
use tracing::{debug, info_span};

use crate::cli::{OutputFormatArg, ProfileArgs};
use crate::summary::{formats_table, print_response};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub fn run_formats() -> Result<()> {
    println!("{}", formats_table(DateFormat::DEFAULT_CANDIDATES));
    Ok(())
}

/// Profiles the requested file.
///
/// Problems with the data itself end up in the response; only invalid
/// arguments are returned as errors.
pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResponse> {
    let options = profile_options(args)?;
    let span = info_span!("profile_command", acceptance = %options.acceptance);
    let _guard = span.enter();

    let upload = match args.input.as_deref() {
        None => None,
        Some(path) => match open_upload(path) {
            Ok(upload) => Some(upload),
            Err(error) => return Ok(ProfileError::from(error).into()),
        },
    };
    let builder = ProfileBuilder::new(PolarsEngine::new(), options);
    Ok(builder.respond(upload.as_ref()))
}

/// Maps profile flags onto [`ProfileOptions`].
pub fn profile_options(args: &ProfileArgs) -> Result<ProfileOptions> {
    let mut options = ProfileOptions::default()
        .with_sample_rows(args.sample_rows)
        .with_detection_sample(args.detection_sample)
        .with_acceptance(args.date_acceptance.into())
        .with_load_options(LoadOptions::default().with_max_file_size(args.max_file_size));

    if !args.date_formats.is_empty() {
        let formats = args
            .date_formats
            .iter()
            .map(|pattern| {
                DateFormat::from_pattern(pattern)
                    .with_context(|| format!("parse --date-format {pattern}"))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(formats = formats.len(), "using custom date formats");
        options = options.with_date_formats(formats);
    }
    Ok(options)
}

fn open_upload(path: &Path) -> tabscope_ingest::Result<Upload> {
    if path.as_os_str() == STDIN_PATH {
        Upload::from_reader("stdin", io::stdin().lock())
    } else {
        Upload::from_path(path)
    }
}

/// Renders a response for stdout in the requested format.
pub fn write_response(response: &ProfileResponse, output: OutputFormatArg) -> Result<()> {
    match output {
        OutputFormatArg::Table => print_response(response),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(response).context("serialize profile")?;
            println!("{json}");
        }
    }
    Ok(())
}
