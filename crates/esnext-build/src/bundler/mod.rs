//! Bundler configuration schema produced by the compiler.
//!
//! The shape mirrors webpack's configuration object: serializing a
//! [`BundlerConfig`] yields the keys `entry`, `output`, `mode`, `context`,
//! `resolve`, `devtool`, `performance`, `stats`, `devServer`, `module` and
//! `plugins`. Loaders and plugins are described by package name plus options,
//! leaving instantiation to the consuming side.

mod dev_server;
mod loader;
mod plugin;
mod rule;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

pub use dev_server::DevServerConfig;
pub use loader::{
    BabelLoaderOptions, CssLoaderOptions, EslintLoaderOptions, ExtractCssLoaderOptions, Loader,
    LocalsConvention, ModuleFormat, PostCssLoaderOptions, SassLoaderOptions, SassOptions,
    TsCompilerOptions, TsLoaderOptions,
};
pub use plugin::{
    CopyFilesOptions, CopyPattern, CssProcessorOptions, CustomPlugin, ExtractStylesOptions,
    IgnoreEmitOptions, LintStylesOptions, OptimizeStylesOptions, Plugin, StyleSourceMap,
};
pub use rule::{Enforce, Rule};

use crate::error::{ConfigError, Result as ConfigResult};

/// One complete configuration, produced per entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub entry: Vec<String>,
    pub output: OutputConfig,
    pub mode: Mode,
    /// Base directory for resolving entry points
    pub context: PathBuf,
    pub resolve: ResolveConfig,
    /// Script source maps
    pub devtool: Devtool,
    pub performance: PerformanceConfig,
    pub stats: Stats,
    pub dev_server: DevServerConfig,
    pub module: ModuleConfig,
    pub plugins: Vec<Plugin>,
}

impl BundlerConfig {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "bundler config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn lint_rule(&self) -> Option<&Rule> {
        self.module
            .rules
            .iter()
            .find(|rule| matches!(rule.loader, Some(Loader::Eslint(_))))
    }

    pub fn ts_rule(&self) -> Option<&Rule> {
        self.module
            .rules
            .iter()
            .find(|rule| matches!(rule.loader, Some(Loader::TypeScript(_))))
    }

    /// Rules that run the stylesheet loader chain.
    pub fn style_rules(&self) -> impl Iterator<Item = &Rule> {
        self.module
            .rules
            .iter()
            .filter(|rule| !rule.use_loaders.is_empty())
    }

    pub fn find_plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub extensions: Vec<String>,
    pub alias: IndexMap<String, PathBuf>,
}

/// `"eval"` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    Eval,
    Disabled,
}

impl Serialize for Devtool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Devtool::Eval => serializer.serialize_str("eval"),
            Devtool::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceConfig {
    pub hints: PerformanceHints,
}

/// `false` or `"warning"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceHints {
    Off,
    Warning,
}

impl Serialize for PerformanceHints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PerformanceHints::Off => serializer.serialize_bool(false),
            PerformanceHints::Warning => serializer.serialize_str("warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stats {
    #[default]
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<Rule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn devtool_serializes_as_string_or_false() {
        assert_eq!(serde_json::to_value(Devtool::Eval).unwrap(), json!("eval"));
        assert_eq!(serde_json::to_value(Devtool::Disabled).unwrap(), json!(false));
    }

    #[test]
    fn performance_hints_serialize_as_false_or_warning() {
        let off = PerformanceConfig {
            hints: PerformanceHints::Off,
        };
        let warn = PerformanceConfig {
            hints: PerformanceHints::Warning,
        };
        assert_eq!(serde_json::to_value(off).unwrap(), json!({ "hints": false }));
        assert_eq!(
            serde_json::to_value(warn).unwrap(),
            json!({ "hints": "warning" })
        );
    }

    #[test]
    fn mode_and_stats_are_lowercase() {
        assert_eq!(
            serde_json::to_value(Mode::Production).unwrap(),
            json!("production")
        );
        assert_eq!(serde_json::to_value(Stats::Normal).unwrap(), json!("normal"));
    }
}
