//! Entry normalization: validates one entry spec and fills in its defaults.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bundler::CustomPlugin;
use crate::defaults::{STYLE_FILE_EXTENSIONS, VALID_FILE_EXTENSIONS};
use crate::error::{ConfigError, Result};
use crate::spec::{EntrySpec, PluginSpec};
use crate::tools::ToolConfigPaths;

static FILE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.[0-9a-z]+$").expect("extension pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Script,
    /// Stylesheet source; the script bundle it would produce is empty
    Style,
}

/// An entry after validation and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub key: String,
    pub file: String,
    pub extension: String,
    pub kind: EntryKind,
    pub script_output_filename: String,
    pub style_output_filename: String,
    /// Outputs the bundler must not emit. Holds the script filename for
    /// stylesheet entries, nothing otherwise.
    pub ignored_output_files: Vec<String>,
    pub use_css_modules: bool,
    pub use_polyfills: bool,
    pub skip_linting: bool,
    pub plugins: Vec<CustomPlugin>,
    pub tool_configs: ToolConfigPaths,
}

impl ResolvedEntry {
    pub fn is_style_entry(&self) -> bool {
        self.kind == EntryKind::Style
    }
}

/// Trailing `.ext` of `path`, as written.
pub fn file_extension(path: &str) -> Option<&str> {
    FILE_EXTENSION.find(path).map(|found| found.as_str())
}

/// Validates `spec` and derives output filenames and ignored outputs.
///
/// `defaults` are the tool config locations in effect for the batch; entry
/// overrides shadow them.
pub fn normalize_entry(
    key: &str,
    spec: &EntrySpec,
    defaults: &ToolConfigPaths,
) -> Result<ResolvedEntry> {
    let extension = match file_extension(&spec.file) {
        Some(ext) if VALID_FILE_EXTENSIONS.contains(&ext) => ext.to_string(),
        other => {
            return Err(ConfigError::InvalidExtension {
                key: key.to_string(),
                extension: other.unwrap_or_default().to_string(),
            })
        }
    };

    let plugins = match &spec.plugins {
        None => Vec::new(),
        Some(PluginSpec::List(plugins)) => plugins.clone(),
        Some(PluginSpec::Invalid(value)) => {
            return Err(ConfigError::InvalidPlugins {
                key: key.to_string(),
                plugins: value.to_string(),
            })
        }
    };

    let kind = if STYLE_FILE_EXTENSIONS.contains(&extension.as_str()) {
        EntryKind::Style
    } else {
        EntryKind::Script
    };

    let script_output_filename =
        output_filename(spec.script_output_filename.as_deref(), key, ".js");
    let style_output_filename =
        output_filename(spec.style_output_filename.as_deref(), key, ".css");

    let ignored_output_files = match kind {
        EntryKind::Style => vec![script_output_filename.clone()],
        EntryKind::Script => Vec::new(),
    };

    tracing::trace!(
        key,
        extension = %extension,
        script = %script_output_filename,
        style = %style_output_filename,
        "normalized entry"
    );

    Ok(ResolvedEntry {
        key: key.to_string(),
        file: spec.file.clone(),
        extension,
        kind,
        script_output_filename,
        style_output_filename,
        ignored_output_files,
        use_css_modules: spec.use_css_modules,
        use_polyfills: spec.use_polyfills,
        skip_linting: spec.skip_linting,
        plugins,
        tool_configs: defaults.with_overrides(&spec.tool_configs),
    })
}

/// `requested` with its extension swapped for `extension`, or `<key><extension>`.
fn output_filename(requested: Option<&str>, key: &str, extension: &str) -> String {
    match requested.filter(|name| !name.is_empty()) {
        Some(name) => format!("{}{}", FILE_EXTENSION.replace(name, ""), extension),
        None => format!("{key}{extension}"),
    }
}
