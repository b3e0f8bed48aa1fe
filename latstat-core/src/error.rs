use crate::latency::EventLabel;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatencyError {
    // Discovery
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Selection
    #[error("failed to read selection from input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("input closed before a selection was made")]
    NoSelection,

    #[error("invalid selection '{input}': {source}")]
    InvalidSelection {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("selection {index} is out of range (0..{len})")]
    SelectionOutOfRange { index: i64, len: usize },

    // Extraction
    #[error("failed to read log file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("measurement '{value}' for '{label}' does not fit in 64 bits")]
    InvalidMeasurement {
        label: EventLabel,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl LatencyError {
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}

/// Returns a short remedial hint for errors the user can act on.
pub fn error_hint(err: &LatencyError) -> Option<&'static str> {
    match err {
        LatencyError::ReadDir { .. } => Some(
            "Check that the directory exists and is readable.\n\
             \n\
             Use `--dir <DIR>` to scan a different directory.",
        ),

        LatencyError::InvalidSelection { .. } | LatencyError::SelectionOutOfRange { .. } => Some(
            "Enter one of the numbers shown next to the file names.\n\
             \n\
             Run `latstat list` to print the numbered files without prompting.",
        ),

        LatencyError::NoSelection => Some(
            "Standard input was closed. Pass `--index <N>` to select a file non-interactively.",
        ),

        _ => None,
    }
}
