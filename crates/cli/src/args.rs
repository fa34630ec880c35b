use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

/// Convert every PNG/JPEG under a directory to WebP with cwebp,
/// deleting each original once its WebP copy has been written.
#[derive(Debug, Parser)]
#[command(name = "webpsweep", version, about)]
pub struct Cli {
    /// Directory to convert
    #[arg(value_name = "DIRECTORY", allow_hyphen_values = true)]
    pub directories: Vec<PathBuf>,
}

/// Argument problems detected before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Error: No directory specified.")]
    NoDirectory,

    #[error("Usage: webpsweep /path/to/your/directory")]
    TooManyArguments,

    #[error("Error: The specified path is not a directory.")]
    NotADirectory,
}

impl Cli {
    /// Parses `args` (program name first), treating every operand as a path.
    ///
    /// Only `--help` and `--version` surface as clap errors. Anything else
    /// clap rejects is kept as a plain operand so the argument count check in
    /// [`Cli::directory`] decides the outcome.
    pub fn parse_operands<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(e)
            }
            Err(_) => Ok(Self {
                directories: args.into_iter().skip(1).map(PathBuf::from).collect(),
            }),
        }
    }

    /// Returns the single directory argument.
    pub fn directory(self) -> Result<PathBuf, UsageError> {
        let mut directories = self.directories;
        match directories.len() {
            0 => Err(UsageError::NoDirectory),
            1 => {
                let directory = directories.remove(0);
                check_directory(&directory)?;
                Ok(directory)
            }
            _ => Err(UsageError::TooManyArguments),
        }
    }
}

fn check_directory(path: &Path) -> Result<(), UsageError> {
    webpsweep_core::ensure_directory(path).map_err(|_| UsageError::NotADirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_operands(std::iter::once("webpsweep").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).directory(), Err(UsageError::NoDirectory));
    }

    #[test]
    fn test_too_many_arguments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(
            parse(&[path, path]).directory(),
            Err(UsageError::TooManyArguments)
        );
    }

    #[test]
    fn test_single_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(parse(&[path]).directory(), Ok(dir.path().to_path_buf()));
    }

    #[test]
    fn test_regular_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"png").unwrap();

        assert_eq!(
            parse(&[file.to_str().unwrap()]).directory(),
            Err(UsageError::NotADirectory)
        );
    }

    #[test]
    fn test_missing_path_is_not_a_directory() {
        assert_eq!(
            parse(&["/nonexistent/webpsweep/root"]).directory(),
            Err(UsageError::NotADirectory)
        );
    }

    #[test]
    fn test_hyphen_operand_is_a_path() {
        let cli = parse(&["-x"]);
        assert_eq!(cli.directories, vec![PathBuf::from("-x")]);
        assert_eq!(cli.directory(), Err(UsageError::NotADirectory));
    }

    #[test]
    fn test_trailing_flag_counts_as_second_argument() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(
            parse(&[path, "--foo"]).directory(),
            Err(UsageError::TooManyArguments)
        );
    }

    #[test]
    fn test_help_and_version_still_reach_clap() {
        let err = Cli::parse_operands(["webpsweep", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::parse_operands(["webpsweep", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            UsageError::NoDirectory.to_string(),
            "Error: No directory specified."
        );
        assert_eq!(
            UsageError::TooManyArguments.to_string(),
            "Usage: webpsweep /path/to/your/directory"
        );
        assert_eq!(
            UsageError::NotADirectory.to_string(),
            "Error: The specified path is not a directory."
        );
    }
}
