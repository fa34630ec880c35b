//! Types for the batch module.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Encoded and the source removed.
    Converted {
        input: PathBuf,
        output: PathBuf,
        output_size_bytes: u64,
        duration_ms: u64,
    },
    /// Encoder failed; the source was left in place.
    EncodeFailed {
        input: PathBuf,
        output: PathBuf,
        error: String,
    },
    /// Encoded, but the source could not be removed.
    DeleteFailed {
        input: PathBuf,
        output: PathBuf,
        error: String,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            Self::Converted { input, .. }
            | Self::EncodeFailed { input, .. }
            | Self::DeleteFailed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Ordered record of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub root: PathBuf,
    pub outcomes: Vec<FileOutcome>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
            elapsed_ms: 0,
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of candidate files processed.
    pub fn candidates(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn encode_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::EncodeFailed { .. }))
            .count()
    }

    pub fn delete_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::DeleteFailed { .. }))
            .count()
    }

    /// Encode plus delete failures.
    pub fn failed(&self) -> usize {
        self.candidates() - self.converted()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Inputs that are still on disk because something went wrong.
    pub fn failed_inputs(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(FileOutcome::input)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BatchReport {
        let mut report = BatchReport::new("/tmp/imgs");
        report.push(FileOutcome::Converted {
            input: PathBuf::from("/tmp/imgs/a.png"),
            output: PathBuf::from("/tmp/imgs/a.webp"),
            output_size_bytes: 1200,
            duration_ms: 40,
        });
        report.push(FileOutcome::EncodeFailed {
            input: PathBuf::from("/tmp/imgs/c.png"),
            output: PathBuf::from("/tmp/imgs/c.webp"),
            error: "Encoder exited with code 255".to_string(),
        });
        report.push(FileOutcome::DeleteFailed {
            input: PathBuf::from("/tmp/imgs/d.jpg"),
            output: PathBuf::from("/tmp/imgs/d.webp"),
            error: "Permission denied (os error 13)".to_string(),
        });
        report
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();
        assert_eq!(report.candidates(), 3);
        assert_eq!(report.converted(), 1);
        assert_eq!(report.encode_failures(), 1);
        assert_eq!(report.delete_failures(), 1);
        assert_eq!(report.failed(), 2);
        assert!(report.has_failures());
        assert_eq!(
            report.failed_inputs(),
            vec![Path::new("/tmp/imgs/c.png"), Path::new("/tmp/imgs/d.jpg")]
        );
    }

    #[test]
    fn test_empty_report_has_no_failures() {
        let report = BatchReport::new("/tmp/empty");
        assert_eq!(report.candidates(), 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["status"], "converted");
        assert_eq!(json["outcomes"][1]["status"], "encode_failed");
        assert_eq!(json["outcomes"][2]["status"], "delete_failed");
        assert_eq!(json["outcomes"][1]["input"], "/tmp/imgs/c.png");
    }
}
