//! Encoder module for producing WebP files from raster images.
//!
//! This module provides the `Encoder` trait and the `CwebpEncoder`
//! implementation, which shells out to the `cwebp` binary from libwebp:
//!
//! ```text
//! cwebp <input_path> -o <output_path>
//! ```
//!
//! An exit status of 0 plus an output file on disk counts as success.
//! Anything else is reported as an `EncoderError`.
//!
//! # Example
//!
//! ```ignore
//! use webpsweep_core::encoder::{CwebpEncoder, Encoder, EncodeJob};
//!
//! let encoder = CwebpEncoder::with_defaults();
//!
//! // Fails early when cwebp is not on PATH
//! encoder.validate().await?;
//!
//! let job = EncodeJob::for_input("/photos/cat.png");
//! let result = encoder.encode(&job).await?;
//! println!("Wrote {} bytes in {} ms", result.output_size_bytes, result.duration_ms);
//! ```

mod config;
mod cwebp;
mod error;
mod traits;
mod types;

pub use config::EncoderConfig;
pub use cwebp::CwebpEncoder;
pub use error::EncoderError;
pub use traits::Encoder;
pub use types::{EncodeJob, EncodeResult};
