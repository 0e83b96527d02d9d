//! Error types for loading and validating the tracking file.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while turning the tracking CSV into an analysis.
#[derive(Error, Debug)]
pub enum TrackingError {
    /// The tracking file does not exist.
    #[error("CSV file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The tracking file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the report depends on.
    #[error("header row is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    /// A row carries a status outside the known set.
    #[error(
        "invalid status {value:?} on line {line} (expected complete, in-progress or not-started)"
    )]
    InvalidStatus { line: usize, value: String },

    /// The configuration file could not be loaded.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Result alias for tracking operations.
pub type Result<T> = std::result::Result<T, TrackingError>;
