//! Errors raised by the binary.
//!
//! Library failures arrive as [`esnext_build::ConfigError`] and keep their
//! message; `main` renders everything through [`cli_error_to_miette`].

mod report;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use esnext_build::ConfigError;
pub use report::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A path named on the command line is missing
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serializing the generated configs failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

pub trait ResultExt<T> {
    /// Report a not-found I/O failure, raw or from the library, as
    /// [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) | CliError::Config(ConfigError::Io(io_err))
                    if io_err.kind() == io::ErrorKind::NotFound =>
                {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "gone")
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err: CliError = ConfigError::InvalidExtension {
            key: "bundle".to_string(),
            extension: ".md".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid file extension \".md\" in entry with key bundle"
        );
    }

    #[test]
    fn with_path_maps_missing_files() {
        let err = Err::<(), _>(not_found())
            .with_path("/spec/esnext-build.json")
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert!(err.to_string().contains("/spec/esnext-build.json"));
    }

    #[test]
    fn with_path_sees_through_library_io_errors() {
        let err = Err::<(), _>(ConfigError::Io(not_found()))
            .with_path("build.toml")
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn with_path_leaves_other_errors_alone() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            Err::<(), _>(denied).with_path("out.json").unwrap_err(),
            CliError::Io(_)
        ));
        assert!(matches!(
            Err::<(), _>(ConfigError::NotFound).with_path("x").unwrap_err(),
            CliError::Config(ConfigError::NotFound)
        ));
    }
}
