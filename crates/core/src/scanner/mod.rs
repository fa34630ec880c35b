//! Discovery of candidate images under a root directory.
//!
//! A candidate is a regular file whose name ends in `.png` or `.jpg`.
//! Matching is case-sensitive on the raw file name, so `photo.PNG` and
//! `photo.jpeg` are left alone.

mod candidate;
mod error;
mod walk;

pub use candidate::{is_candidate, webp_output_path, CandidateFile, CANDIDATE_SUFFIXES};
pub use error::ScanError;
pub use walk::{ensure_directory, scan, Traversal};
