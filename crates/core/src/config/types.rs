use serde::{Deserialize, Serialize};

use crate::encoder::EncoderConfig;
use crate::scanner::Traversal;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Directory scan configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// How the root directory is walked (default: recursive)
    #[serde(default)]
    pub traversal: Traversal,
}

/// Batch outcome handling
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Exit non-zero when any file failed to convert or delete.
    /// Off by default: a partially failed batch still exits 0.
    #[serde(default)]
    pub fail_on_error: bool,
}
