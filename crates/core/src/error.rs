//! Unified error types for sogc.
//!
//! Every variant is recoverable: callers log it and degrade to an empty
//! input, an empty cache or a skipped write.

use std::path::PathBuf;

/// Unified error type for the sogc file and data layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Company name was empty after trimming.
    #[error("INVALID_NAME: {0}")]
    InvalidName(String),

    /// Filesystem operation failed.
    #[error("IO_ERROR: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON content could not be parsed or serialized.
    #[error("JSON_ERROR: {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV content could not be read or written.
    #[error("CSV_ERROR: {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv { path: path.into(), source }
    }
}
