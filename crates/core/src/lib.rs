pub mod batch;
pub mod config;
pub mod encoder;
pub mod scanner;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use batch::{BatchError, BatchReport, BatchRunner, FileOutcome};
pub use config::{
    config_path_from_env, load_config, load_config_from_str, validate_config, BatchConfig,
    Config, ConfigError, ScanConfig,
};
pub use encoder::{CwebpEncoder, EncodeJob, EncodeResult, Encoder, EncoderConfig, EncoderError};
pub use scanner::{
    ensure_directory, is_candidate, scan, webp_output_path, CandidateFile, ScanError, Traversal,
};
