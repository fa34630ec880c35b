//! Error types for the encoder module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding a single file.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Encoder binary could not be launched because it does not exist.
    #[error("Encoder not found at path: {path}")]
    EncoderNotFound { path: PathBuf },

    /// Encoder ran and exited unsuccessfully.
    #[error("{}", exit_message(.code, .stderr))]
    EncodeFailed {
        code: Option<i32>,
        stderr: Option<String>,
    },

    /// Encoder reported success but the output file is not there.
    #[error("Encoder exited successfully but did not create {path}")]
    OutputMissing { path: PathBuf },

    /// Encode timed out and the encoder was killed.
    #[error("Encoding timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running the encoder.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_message(code: &Option<i32>, stderr: &Option<String>) -> String {
    let status = match code {
        Some(code) => format!("Encoder exited with code {}", code),
        None => "Encoder was terminated by a signal".to_string(),
    };
    match stderr {
        Some(stderr) => format!("{}: {}", status, stderr),
        None => status,
    }
}

impl EncoderError {
    /// Creates an encode failed error, dropping blank stderr output.
    pub fn encode_failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        let stderr = stderr.into().trim().to_string();
        Self::EncodeFailed {
            code,
            stderr: if stderr.is_empty() {
                None
            } else {
                Some(stderr)
            },
        }
    }
}
