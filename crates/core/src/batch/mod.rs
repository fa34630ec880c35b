//! Batch conversion of every candidate image under a root directory.
//!
//! Files are handled one at a time: encode, then delete the source, then
//! record the outcome. A failure on one file never stops the batch; it is
//! logged and kept in the [`BatchReport`].

mod error;
mod runner;
mod types;

pub use error::BatchError;
pub use runner::BatchRunner;
pub use types::{BatchReport, FileOutcome};
