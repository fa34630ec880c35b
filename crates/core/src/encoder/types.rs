//! Types for the encoder module.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::scanner::webp_output_path;

/// A single encoder invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeJob {
    /// Source PNG/JPEG file.
    pub input_path: PathBuf,
    /// Destination WebP file. Overwritten if it already exists.
    pub output_path: PathBuf,
}

impl EncodeJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Creates a job writing a `.webp` sibling of the input.
    pub fn for_input(input_path: impl AsRef<Path>) -> Self {
        let input_path = input_path.as_ref();
        Self::new(input_path, webp_output_path(input_path))
    }
}

/// Result of a successful encode.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeResult {
    pub output_path: PathBuf,
    pub output_size_bytes: u64,
    /// Wall-clock time spent in the encoder.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_input_derives_webp_sibling() {
        let job = EncodeJob::for_input("/photos/holiday/beach.jpg");
        assert_eq!(job.input_path, PathBuf::from("/photos/holiday/beach.jpg"));
        assert_eq!(job.output_path, PathBuf::from("/photos/holiday/beach.webp"));
    }
}
