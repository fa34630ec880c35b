use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::candidate::{is_candidate, CandidateFile};
use super::error::ScanError;

/// How the root directory is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Descend into every subdirectory.
    #[default]
    Recursive,
    /// Only look at the root's direct entries.
    Flat,
}

impl Traversal {
    fn max_depth(self) -> usize {
        match self {
            Self::Recursive => usize::MAX,
            Self::Flat => 1,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recursive => write!(f, "recursive"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Fails unless `root` exists and is a directory (symlinks are followed).
pub fn ensure_directory(root: &Path) -> Result<(), ScanError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        })
    }
}

/// Collects candidate images under `root`, sorted by file name per directory.
///
/// Unreadable entries below the root are logged and skipped. Symlinked
/// directories are not descended into; symlinks to regular files count.
pub fn scan(root: &Path, traversal: Traversal) -> Result<Vec<CandidateFile>, ScanError> {
    ensure_directory(root)?;

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(traversal.max_depth())
        .sort_by_file_name();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::RootUnreadable {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if is_candidate(path) && path.is_file() {
            candidates.push(CandidateFile::new(entry.into_path()));
        }
    }

    debug!(
        "Found {} candidate(s) under {} ({} traversal)",
        candidates.len(),
        root.display(),
        traversal
    );
    Ok(candidates)
}
