//! Mock encoder for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::encoder::{EncodeJob, EncodeResult, Encoder, EncoderError};

/// Bytes written as the placeholder WebP output.
pub const MOCK_WEBP_BYTES: &[u8] = b"RIFF\x0c\x00\x00\x00WEBPVP8 ";

/// A recorded encode job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedEncode {
    /// The job that was submitted.
    pub job: EncodeJob,
    /// Whether the encode succeeded.
    pub success: bool,
}

/// Mock implementation of the Encoder trait.
///
/// Provides controllable behavior for testing:
/// - Track encode jobs for assertions
/// - Fail specific files by name
/// - Remove an input behind the runner's back to provoke delete failures
/// - Simulate a missing encoder binary in `validate`
///
/// Successful encodes write [`MOCK_WEBP_BYTES`] to the output path, so
/// tests can check the filesystem the same way they would with cwebp.
///
/// # Example
///
/// ```rust,ignore
/// use webpsweep_core::testing::MockEncoder;
///
/// let encoder = MockEncoder::new();
/// encoder.fail_for("c.png").await;
///
/// let runner = BatchRunner::new(encoder.clone());
/// let report = runner.run(dir.path()).await?;
///
/// assert_eq!(encoder.encode_count().await, 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockEncoder {
    /// Recorded encodes.
    encodes: Arc<RwLock<Vec<RecordedEncode>>>,
    /// File names that fail to encode.
    failing_names: Arc<RwLock<HashSet<OsString>>>,
    /// File names whose input disappears during encoding.
    vanishing_names: Arc<RwLock<HashSet<OsString>>>,
    /// If set, the next encode will fail with this error.
    next_error: Arc<RwLock<Option<EncoderError>>>,
    /// Whether `validate` reports the encoder as missing.
    missing_binary: Arc<RwLock<bool>>,
    /// Simulated encode duration.
    encode_duration: Arc<RwLock<Duration>>,
}

impl Default for MockEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEncoder {
    /// Create a new mock encoder.
    pub fn new() -> Self {
        Self {
            encodes: Arc::new(RwLock::new(Vec::new())),
            failing_names: Arc::new(RwLock::new(HashSet::new())),
            vanishing_names: Arc::new(RwLock::new(HashSet::new())),
            next_error: Arc::new(RwLock::new(None)),
            missing_binary: Arc::new(RwLock::new(false)),
            encode_duration: Arc::new(RwLock::new(Duration::ZERO)),
        }
    }

    /// Get all recorded encodes.
    pub async fn recorded_encodes(&self) -> Vec<RecordedEncode> {
        self.encodes.read().await.clone()
    }

    /// Get the number of encodes attempted.
    pub async fn encode_count(&self) -> usize {
        self.encodes.read().await.len()
    }

    /// Make every input with this file name fail with a non-zero exit.
    pub async fn fail_for(&self, file_name: &str) {
        self.failing_names
            .write()
            .await
            .insert(OsString::from(file_name));
    }

    /// Encode inputs with this file name successfully, then remove the input
    /// so the runner's delete step fails.
    pub async fn vanish_input_for(&self, file_name: &str) {
        self.vanishing_names
            .write()
            .await
            .insert(OsString::from(file_name));
    }

    /// Configure the next encode to fail with the given error.
    pub async fn set_next_error(&self, error: EncoderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make `validate` fail as if the binary were not installed.
    pub async fn set_missing_binary(&self, missing: bool) {
        *self.missing_binary.write().await = missing;
    }

    /// Set the simulated encode duration.
    pub async fn set_encode_duration(&self, duration: Duration) {
        *self.encode_duration.write().await = duration;
    }

    async fn matches(names: &RwLock<HashSet<OsString>>, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => names.read().await.contains(name),
            None => false,
        }
    }

    async fn record(&self, job: &EncodeJob, success: bool) {
        self.encodes.write().await.push(RecordedEncode {
            job: job.clone(),
            success,
        });
    }
}

#[async_trait]
impl Encoder for MockEncoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn encode(&self, job: &EncodeJob) -> Result<EncodeResult, EncoderError> {
        let next_error = self.next_error.write().await.take();
        if let Some(err) = next_error {
            self.record(job, false).await;
            return Err(err);
        }

        if Self::matches(&self.failing_names, &job.input_path).await {
            self.record(job, false).await;
            return Err(EncoderError::encode_failed(
                Some(255),
                format!("Could not process file {}", job.input_path.display()),
            ));
        }

        let duration = *self.encode_duration.read().await;
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }

        tokio::fs::write(&job.output_path, MOCK_WEBP_BYTES).await?;

        if Self::matches(&self.vanishing_names, &job.input_path).await {
            tokio::fs::remove_file(&job.input_path).await?;
        }

        self.record(job, true).await;
        Ok(EncodeResult {
            output_path: job.output_path.clone(),
            output_size_bytes: MOCK_WEBP_BYTES.len() as u64,
            duration_ms: duration.as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        if *self.missing_binary.read().await {
            return Err(EncoderError::EncoderNotFound {
                path: "cwebp".into(),
            });
        }
        Ok(())
    }
}
