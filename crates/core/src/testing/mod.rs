//! Testing utilities and mock implementations.
//!
//! This module provides a mock implementation of the `Encoder` trait and
//! fixture helpers, allowing batch runs to be tested without cwebp installed.
//!
//! # Example
//!
//! ```rust,ignore
//! use webpsweep_core::testing::{fixtures, MockEncoder};
//!
//! let dir = TempDir::new()?;
//! fixtures::image_tree(dir.path(), &["a.png", "b.jpg", "notes.txt"]);
//! let encoder = MockEncoder::new();
//! encoder.fail_for("b.jpg").await;
//! ```

mod mock_encoder;

pub use mock_encoder::{MockEncoder, RecordedEncode, MOCK_WEBP_BYTES};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Placeholder bytes for source images. The mock encoder never decodes them.
    pub const SOURCE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n";

    /// Populate `root` with the given relative file paths.
    ///
    /// Intermediate directories are created as needed.
    pub fn image_tree(root: &Path, files: &[&str]) {
        for file in files {
            write_file(&root.join(file));
        }
    }

    /// Write placeholder bytes at `path`, creating parent directories.
    pub fn write_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, SOURCE_BYTES).expect("Failed to write fixture file");
    }

    /// All files under `root` as sorted paths relative to it.
    pub fn list_files(root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .expect("walked path outside root")
                    .to_path_buf()
            })
            .collect();
        files.sort();
        files
    }
}
