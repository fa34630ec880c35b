use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name suffixes eligible for conversion.
pub const CANDIDATE_SUFFIXES: &[&str] = &[".png", ".jpg"];

/// Whether the file name of `path` ends in one of [`CANDIDATE_SUFFIXES`].
///
/// Only the name is inspected; the file is neither opened nor stat'ed.
pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    CANDIDATE_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix.as_bytes()))
}

/// Replaces the last extension of `path` with `webp`.
///
/// `a.b.png` becomes `a.b.webp`. A dotfile such as `.png` has no extension,
/// so it becomes `.png.webp`.
pub fn webp_output_path(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

/// An image found during a scan, paired with the WebP path it converts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub output_path: PathBuf,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let output_path = webp_output_path(&path);
        Self { path, output_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_candidate_matches_png_and_jpg() {
        assert!(is_candidate(Path::new("/tmp/imgs/a.png")));
        assert!(is_candidate(Path::new("/tmp/imgs/b.jpg")));
        assert!(is_candidate(Path::new("relative/archive.tar.png")));
    }

    #[test]
    fn test_is_candidate_is_case_sensitive() {
        assert!(!is_candidate(Path::new("/tmp/imgs/a.PNG")));
        assert!(!is_candidate(Path::new("/tmp/imgs/b.Jpg")));
    }

    #[test]
    fn test_is_candidate_rejects_other_suffixes() {
        assert!(!is_candidate(Path::new("/tmp/imgs/c.jpeg")));
        assert!(!is_candidate(Path::new("/tmp/imgs/d.gif")));
        assert!(!is_candidate(Path::new("/tmp/imgs/notes.txt")));
        assert!(!is_candidate(Path::new("/tmp/imgs/done.webp")));
        assert!(!is_candidate(Path::new("/tmp/imgs/png")));
        assert!(!is_candidate(Path::new("/")));
    }

    #[test]
    fn test_is_candidate_bare_suffix_name() {
        assert!(is_candidate(Path::new("/tmp/imgs/.png")));
    }

    #[test]
    fn test_webp_output_path() {
        assert_eq!(
            webp_output_path(Path::new("/tmp/imgs/a.png")),
            PathBuf::from("/tmp/imgs/a.webp")
        );
        assert_eq!(
            webp_output_path(Path::new("/tmp/imgs/scan.2024.jpg")),
            PathBuf::from("/tmp/imgs/scan.2024.webp")
        );
        assert_eq!(
            webp_output_path(Path::new("/tmp/imgs/.png")),
            PathBuf::from("/tmp/imgs/.png.webp")
        );
    }

    #[test]
    fn test_candidate_file_new() {
        let candidate = CandidateFile::new("/tmp/imgs/b.jpg");
        assert_eq!(candidate.path, PathBuf::from("/tmp/imgs/b.jpg"));
        assert_eq!(candidate.output_path, PathBuf::from("/tmp/imgs/b.webp"));
    }
}
