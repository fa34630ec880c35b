//! Error types for the batch module.

use thiserror::Error;

use crate::scanner::ScanError;

/// Errors that stop a batch before any file is converted.
///
/// Per-file failures are not errors at this level; they are reported as
/// [`FileOutcome`](super::FileOutcome)s.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The blocking directory walk panicked or was cancelled.
    #[error("Directory scan task failed: {0}")]
    ScanTask(#[from] tokio::task::JoinError),
}
