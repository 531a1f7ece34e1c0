//! Error types for spec loading and configuration compilation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every variant aborts the whole batch; there is no partial result.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("You passed the env prop to the config compiler. Did you mean to pass argv?")]
    CallerMisuse,

    #[error("Invalid file extension \"{extension}\" in entry with key {key}")]
    InvalidExtension { key: String, extension: String },

    #[error("Invalid plugins format in entry with key {key}:\n\n{plugins}")]
    InvalidPlugins { key: String, plugins: String },

    // Spec parsing/loading errors
    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("no esnext-build spec found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Key of the entry that failed validation, if the error belongs to one.
    pub fn entry_key(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidExtension { key, .. } | ConfigError::InvalidPlugins { key, .. } => {
                Some(key)
            }
            _ => None,
        }
    }
}
