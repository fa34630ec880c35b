//! cwebp-based encoder implementation.

use async_trait::async_trait;
use std::ffi::OsString;
use std::process::Stdio;
use std::path::Path;
use std::time::{Instant, SystemTime};
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::EncoderConfig;
use super::error::EncoderError;
use super::traits::Encoder;
use super::types::{EncodeJob, EncodeResult};

/// Encoder that runs the libwebp `cwebp` command line tool.
pub struct CwebpEncoder {
    config: EncoderConfig,
}

impl CwebpEncoder {
    /// Creates a new cwebp encoder with the given configuration.
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Creates an encoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EncoderConfig::default())
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Builds cwebp arguments: `<input> -o <output>`.
    fn build_args(job: &EncodeJob) -> Vec<OsString> {
        vec![
            job.input_path.clone().into_os_string(),
            OsString::from("-o"),
            job.output_path.clone().into_os_string(),
        ]
    }

    /// Maps a spawn failure, singling out a missing binary.
    fn launch_error(&self, e: std::io::Error) -> EncoderError {
        if e.kind() == std::io::ErrorKind::NotFound {
            EncoderError::EncoderNotFound {
                path: self.config.path.clone(),
            }
        } else {
            EncoderError::Io(e)
        }
    }
}

/// Modification time of `path`, if it exists.
async fn modified_at(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|meta| meta.modified().ok())
}

#[async_trait]
impl Encoder for CwebpEncoder {
    fn name(&self) -> &str {
        "cwebp"
    }

    async fn encode(&self, job: &EncodeJob) -> Result<EncodeResult, EncoderError> {
        let start = Instant::now();
        // A leftover output from an earlier run must not pass for a fresh one.
        let stale_mtime = modified_at(&job.output_path).await;
        let args = Self::build_args(job);
        debug!("Running {:?} {:?}", self.config.path, args);

        // Dropping the child on timeout kills it.
        let child = Command::new(&self.config.path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        let output = match self.config.timeout_secs {
            Some(timeout_secs) => {
                timeout(Duration::from_secs(timeout_secs), child.wait_with_output())
                    .await
                    .map_err(|_| EncoderError::Timeout { timeout_secs })??
            }
            None => child.wait_with_output().await?,
        };

        if !output.status.success() {
            return Err(EncoderError::encode_failed(
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        let output_missing = || EncoderError::OutputMissing {
            path: job.output_path.clone(),
        };
        let output_meta = tokio::fs::metadata(&job.output_path)
            .await
            .map_err(|_| output_missing())?;
        if stale_mtime.is_some() && output_meta.modified().ok() == stale_mtime {
            return Err(output_missing());
        }

        Ok(EncodeResult {
            output_path: job.output_path.clone(),
            output_size_bytes: output_meta.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        let status = Command::new(&self.config.path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| self.launch_error(e))?;

        debug!(
            "Encoder {:?} responded to -version with {}",
            self.config.path, status
        );
        Ok(())
    }
}
