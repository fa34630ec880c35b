//! Sequential batch runner.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

use super::error::BatchError;
use super::types::{BatchReport, FileOutcome};
use crate::encoder::{EncodeJob, Encoder};
use crate::scanner::{scan, CandidateFile, Traversal};

/// Converts every candidate under a root directory with an [`Encoder`].
pub struct BatchRunner<E: Encoder> {
    encoder: E,
    traversal: Traversal,
}

impl<E: Encoder> BatchRunner<E> {
    /// Creates a runner using recursive traversal.
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            traversal: Traversal::default(),
        }
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Scans `root` and processes every candidate in order.
    ///
    /// Only a bad root aborts the run. Per-file failures end up in the report.
    pub async fn run(&self, root: &Path) -> Result<BatchReport, BatchError> {
        let start = Instant::now();
        info!(
            "Converting images under {} ({} traversal, encoder: {})",
            root.display(),
            self.traversal,
            self.encoder.name()
        );

        let scan_root = root.to_path_buf();
        let traversal = self.traversal;
        let candidates =
            tokio::task::spawn_blocking(move || scan(&scan_root, traversal)).await??;

        let mut report = BatchReport::new(root);
        for candidate in &candidates {
            report.push(self.process_file(candidate).await);
        }
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            "Processed {} file(s) in {} ms: {} converted, {} encode failure(s), {} delete failure(s)",
            report.candidates(),
            report.elapsed_ms,
            report.converted(),
            report.encode_failures(),
            report.delete_failures()
        );

        Ok(report)
    }

    /// Encodes one candidate and removes its source on success.
    pub async fn process_file(&self, candidate: &CandidateFile) -> FileOutcome {
        let job = EncodeJob::new(&candidate.path, &candidate.output_path);
        let input = job.input_path.clone();
        let output = job.output_path.clone();

        debug!("Encoding {} -> {}", input.display(), output.display());
        let result = match self.encoder.encode(&job).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error converting {}: {}", input.display(), e);
                return FileOutcome::EncodeFailed {
                    input,
                    output,
                    error: e.to_string(),
                };
            }
        };

        if let Err(e) = tokio::fs::remove_file(&input).await {
            error!("Error deleting {}: {}", input.display(), e);
            return FileOutcome::DeleteFailed {
                input,
                output,
                error: e.to_string(),
            };
        }

        info!("Converted {} to {}", input.display(), output.display());
        FileOutcome::Converted {
            input,
            output: result.output_path,
            output_size_bytes: result.output_size_bytes,
            duration_ms: result.duration_ms,
        }
    }
}
