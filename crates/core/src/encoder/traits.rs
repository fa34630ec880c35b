//! Trait definitions for the encoder module.

use async_trait::async_trait;

use super::error::EncoderError;
use super::types::{EncodeJob, EncodeResult};

/// An encoder that turns one raster image into a WebP file.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Returns the name of this encoder implementation.
    fn name(&self) -> &str;

    /// Encodes `job.input_path` into `job.output_path`, waiting for completion.
    ///
    /// The input file is never modified or removed by the encoder.
    async fn encode(&self, job: &EncodeJob) -> Result<EncodeResult, EncoderError>;

    /// Checks that the encoder can be launched at all.
    async fn validate(&self) -> Result<(), EncoderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct FixedEncoder;

    #[async_trait]
    impl Encoder for FixedEncoder {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn encode(&self, job: &EncodeJob) -> Result<EncodeResult, EncoderError> {
            Ok(EncodeResult {
                output_path: job.output_path.clone(),
                output_size_bytes: 2048,
                duration_ms: 5,
            })
        }

        async fn validate(&self) -> Result<(), EncoderError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_encoder_as_trait_object() {
        let encoder: Arc<dyn Encoder> = Arc::new(FixedEncoder);
        let job = EncodeJob::for_input("/images/logo.png");

        let result = encoder.encode(&job).await.unwrap();
        assert_eq!(result.output_path, PathBuf::from("/images/logo.webp"));
        assert_eq!(encoder.name(), "fixed");
        assert!(encoder.validate().await.is_ok());
    }
}
