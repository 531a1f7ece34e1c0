//! Input specification: the global spec and its per-entry specs.
//!
//! A spec is either built in code or deserialized from JSON/TOML. Entry and
//! alias maps keep their declaration order, which is also the order in which
//! configurations are emitted.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::bundler::CustomPlugin;
use crate::defaults::default_true;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::tools::ToolConfigOverrides;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSpec {
    /// Output key → entry. One configuration is produced per entry.
    #[serde(default)]
    pub entries: IndexMap<String, EntrySpec>,

    /// Import alias → path relative to the source directory
    #[serde(default)]
    pub aliases: IndexMap<String, PathBuf>,

    /// Packages under `node_modules` that go through the JSX transpiler
    #[serde(default)]
    pub node_modules_to_babel: Vec<String>,

    #[serde(default = "default_true")]
    pub use_https: bool,

    #[serde(default)]
    pub allow_cors: bool,

    #[serde(flatten)]
    pub tool_configs: ToolConfigOverrides,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argv: Option<Argv>,

    /// Never valid. Present only so that passing it can be rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Value>,
}

impl Default for GlobalSpec {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            aliases: IndexMap::new(),
            node_modules_to_babel: Vec::new(),
            use_https: true,
            allow_cors: false,
            tool_configs: ToolConfigOverrides::default(),
            argv: None,
            env: None,
        }
    }
}

impl GlobalSpec {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use esnext_build::GlobalSpec;
    /// use serde_json::json;
    ///
    /// let spec = GlobalSpec::from_value(json!({
    ///     "entries": {
    ///         "bundle": { "file": "index.js" },
    ///         "styles": { "file": "styles/app.scss", "useCssModules": true }
    ///     },
    ///     "aliases": { "Data": "data" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(spec.entries.len(), 2);
    /// assert!(spec.use_https);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "spec".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "spec".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_entry(mut self, key: impl Into<String>, entry: EntrySpec) -> Self {
        self.entries.insert(key.into(), entry);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.aliases.insert(alias.into(), path.into());
        self
    }

    pub fn with_argv(mut self, argv: Argv) -> Self {
        self.argv = Some(argv);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySpec {
    /// Source file relative to the source directory
    pub file: String,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub plugins: Option<PluginSpec>,

    #[serde(default)]
    pub use_css_modules: bool,

    #[serde(default)]
    pub use_polyfills: bool,

    #[serde(default)]
    pub skip_linting: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_output_filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_output_filename: Option<String>,

    #[serde(flatten)]
    pub tool_configs: ToolConfigOverrides,
}

impl EntrySpec {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn with_plugins(mut self, plugins: Vec<CustomPlugin>) -> Self {
        self.plugins = Some(PluginSpec::List(plugins));
        self
    }

    pub fn css_modules(mut self, enabled: bool) -> Self {
        self.use_css_modules = enabled;
        self
    }

    pub fn polyfills(mut self, enabled: bool) -> Self {
        self.use_polyfills = enabled;
        self
    }

    pub fn skip_linting(mut self, skip: bool) -> Self {
        self.skip_linting = skip;
        self
    }
}

/// Caller-supplied plugins as written in the spec.
///
/// Anything that is not a list of plugin descriptors lands in `Invalid` and
/// is rejected when the entry is normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    List(Vec<CustomPlugin>),
    Invalid(Value),
}

/// Bundler command-line flags. A flag counts as set when its key is present,
/// whatever its value, `null` included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Argv {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub prod: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub analyze: Option<Value>,
}

impl Argv {
    pub fn production() -> Self {
        Self {
            prod: Some(Value::Bool(true)),
            analyze: None,
        }
    }
}

/// Maps a key that is present to `Some`, even when its value is `null`.
/// Only an absent key falls back to `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
