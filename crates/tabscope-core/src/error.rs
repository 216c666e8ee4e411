//! Errors reported in place of a profile.

use tabscope_engine::EngineError;
use thiserror::Error;

/// Why a profile could not be built.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("No file was uploaded.")]
    NoFile,

    #[error("The uploaded dataset is empty.")]
    EmptyDataset,

    #[error("An unexpected error occurred: {0}")]
    Processing(String),
}

impl From<EngineError> for ProfileError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Ingest(ingest) if ingest.is_empty_input() => ProfileError::EmptyDataset,
            other => ProfileError::Processing(other.to_string()),
        }
    }
}

impl From<tabscope_ingest::IngestError> for ProfileError {
    fn from(err: tabscope_ingest::IngestError) -> Self {
        EngineError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tabscope_ingest::IngestError;

    #[test]
    fn user_facing_messages() {
        assert_eq!(ProfileError::NoFile.to_string(), "No file was uploaded.");
        assert_eq!(
            ProfileError::EmptyDataset.to_string(),
            "The uploaded dataset is empty."
        );
        assert_eq!(
            ProfileError::Processing("boom".into()).to_string(),
            "An unexpected error occurred: boom"
        );
    }

    #[test]
    fn blank_input_is_an_empty_dataset() {
        let err: ProfileError = IngestError::EmptyCsv {
            path: PathBuf::from("x.csv"),
        }
        .into();
        assert_eq!(err, ProfileError::EmptyDataset);
    }

    #[test]
    fn other_engine_errors_keep_their_message() {
        let err: ProfileError = EngineError::ColumnNotFound {
            column: "x".into(),
        }
        .into();
        assert_eq!(
            err,
            ProfileError::Processing("column 'x' not found".to_string())
        );
    }
}
