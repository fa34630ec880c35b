//! Error types for the scanner module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan before any file is processed.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path is missing or is not a directory.
    #[error("The specified path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Root directory exists but could not be listed.
    #[error("Failed to read directory: {path}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
