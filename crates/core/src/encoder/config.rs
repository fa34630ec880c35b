//! Configuration for the encoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the cwebp-based encoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Path to the cwebp binary. A bare name is resolved through `PATH`.
    #[serde(default = "default_encoder_path")]
    pub path: PathBuf,

    /// Timeout for a single encode in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_encoder_path() -> PathBuf {
    PathBuf::from("cwebp")
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            path: default_encoder_path(),
            timeout_secs: None,
        }
    }
}

impl EncoderConfig {
    /// Creates a new config with a custom encoder path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.path, PathBuf::from("cwebp"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_config_builder() {
        let config =
            EncoderConfig::with_path(PathBuf::from("/usr/local/bin/cwebp")).with_timeout(90);

        assert_eq!(config.path, PathBuf::from("/usr/local/bin/cwebp"));
        assert_eq!(config.timeout_secs, Some(90));
    }
}
