//! Locating and reading a spec on disk.
//!
//! A project keeps its spec in `esnext-build.json`, `esnext-build.toml` or
//! under the `esnextBuild` key of `package.json`, checked in that order. Every
//! format is read into a `serde_json::Value` with key order preserved before
//! it becomes a [`GlobalSpec`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::spec::GlobalSpec;

pub const JSON_SPEC_FILE: &str = "esnext-build.json";
pub const TOML_SPEC_FILE: &str = "esnext-build.toml";
pub const PACKAGE_JSON_FILE: &str = "package.json";
/// Key of `package.json` holding an embedded spec
pub const PACKAGE_JSON_FIELD: &str = "esnextBuild";

/// How a spec file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Toml,
    /// Spec nested under [`PACKAGE_JSON_FIELD`]
    PackageJson,
}

impl SpecFormat {
    /// `package.json` by name, `.toml` by extension, JSON otherwise.
    pub fn of(path: &Path) -> Self {
        if path.file_name().is_some_and(|name| name == PACKAGE_JSON_FILE) {
            SpecFormat::PackageJson
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            SpecFormat::Toml
        } else {
            SpecFormat::Json
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<Value> {
        match self {
            SpecFormat::Json => parse_json(path, content),
            SpecFormat::Toml => {
                let document: toml::Value =
                    toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
                        field: path.display().to_string(),
                        hint: Some(format!("Invalid TOML: {}", e)),
                    })?;
                serde_json::to_value(document).map_err(|e| ConfigError::InvalidValue {
                    field: path.display().to_string(),
                    hint: Some(e.to_string()),
                })
            }
            SpecFormat::PackageJson => {
                let mut manifest = parse_json(path, content)?;
                match manifest.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
                    Some(spec) if !spec.is_null() => Ok(spec),
                    _ => Err(ConfigError::InvalidValue {
                        field: PACKAGE_JSON_FIELD.to_string(),
                        hint: Some(format!(
                            "{} has no '{}' field",
                            path.display(),
                            PACKAGE_JSON_FIELD
                        )),
                    }),
                }
            }
        }
    }
}

fn parse_json(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
        field: path.display().to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })
}

/// Searches one project directory for its spec.
///
/// ```no_run
/// use esnext_build::ConfigDiscovery;
///
/// let spec = ConfigDiscovery::new(".").load().unwrap();
/// println!("{} entries", spec.entries.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// First spec file present under the root. A `package.json` only counts
    /// when it carries a non-null `esnextBuild` key.
    pub fn find(&self) -> Option<PathBuf> {
        let dedicated = [JSON_SPEC_FILE, TOML_SPEC_FILE]
            .into_iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file());
        if dedicated.is_some() {
            return dedicated;
        }

        let manifest = self.root.join(PACKAGE_JSON_FILE);
        let embeds_spec = fs::read_to_string(&manifest)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .is_some_and(|parsed| {
                parsed
                    .get(PACKAGE_JSON_FIELD)
                    .is_some_and(|field| !field.is_null())
            });
        embeds_spec.then_some(manifest)
    }

    /// # Errors
    ///
    /// `ConfigError::NotFound` when [`find`](Self::find) comes up empty.
    pub fn load(&self) -> Result<GlobalSpec> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_spec(&path)
    }
}

/// Reads the spec at `path`, picking the format with [`SpecFormat::of`].
pub fn load_spec(path: &Path) -> Result<GlobalSpec> {
    let format = SpecFormat::of(path);
    tracing::debug!(path = %path.display(), ?format, "loading spec");

    let content = fs::read_to_string(path)?;
    GlobalSpec::from_value(format.parse(path, &content)?)
}

/// [`ConfigDiscovery::load`] on the current directory.
pub fn discover() -> Result<GlobalSpec> {
    ConfigDiscovery::new(std::env::current_dir()?).load()
}
