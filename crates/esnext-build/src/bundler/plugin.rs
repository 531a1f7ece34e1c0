use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

/// A plugin instance, serialized as `{ "plugin": <package>, "options": { .. } }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Plugin {
    LintStyles(LintStylesOptions),
    ExtractStyles(ExtractStylesOptions),
    OptimizeStyles(OptimizeStylesOptions),
    CopyFiles(CopyFilesOptions),
    IgnoreEmit(IgnoreEmitOptions),
    /// Supplied by the caller and passed through untouched
    Custom(CustomPlugin),
}

impl Plugin {
    pub const LINT_STYLES: &'static str = "stylelint-webpack-plugin";
    pub const EXTRACT_STYLES: &'static str = "extract-css-chunks-webpack-plugin";
    pub const OPTIMIZE_STYLES: &'static str = "optimize-css-assets-webpack-plugin";
    pub const COPY_FILES: &'static str = "copy-webpack-plugin";
    pub const IGNORE_EMIT: &'static str = "ignore-emit-webpack-plugin";

    pub fn name(&self) -> &str {
        match self {
            Plugin::LintStyles(_) => Self::LINT_STYLES,
            Plugin::ExtractStyles(_) => Self::EXTRACT_STYLES,
            Plugin::OptimizeStyles(_) => Self::OPTIMIZE_STYLES,
            Plugin::CopyFiles(_) => Self::COPY_FILES,
            Plugin::IgnoreEmit(_) => Self::IGNORE_EMIT,
            Plugin::Custom(custom) => &custom.plugin,
        }
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Plugin", 2)?;
        state.serialize_field("plugin", self.name())?;
        match self {
            Plugin::LintStyles(options) => state.serialize_field("options", options)?,
            Plugin::ExtractStyles(options) => state.serialize_field("options", options)?,
            Plugin::OptimizeStyles(options) => state.serialize_field("options", options)?,
            Plugin::CopyFiles(options) => state.serialize_field("options", options)?,
            Plugin::IgnoreEmit(options) => state.serialize_field("options", options)?,
            Plugin::Custom(custom) => state.serialize_field("options", &custom.options)?,
        }
        state.end()
    }
}

/// Caller-provided plugin descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPlugin {
    /// Package name of the plugin
    pub plugin: String,

    /// Options forwarded to the plugin constructor
    #[serde(default)]
    pub options: Value,
}

impl CustomPlugin {
    pub fn new(plugin: impl Into<String>, options: Value) -> Self {
        Self {
            plugin: plugin.into(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintStylesOptions {
    pub config_file: PathBuf,
    pub fix: bool,
    pub allow_empty_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStylesOptions {
    pub filename: String,
    pub chunk_filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeStylesOptions {
    pub css_processor_options: CssProcessorOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CssProcessorOptions {
    pub minimize: bool,

    /// Style source maps, written to a separate file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<StyleSourceMap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleSourceMap {
    pub inline: bool,
    pub annotation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFilesOptions {
    pub patterns: Vec<CopyPattern>,
    pub info: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreEmitOptions {
    pub ignore: Vec<String>,
}
