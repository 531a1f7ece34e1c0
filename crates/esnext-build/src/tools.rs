//! Tool configuration file locations (eslint, stylelint, babel, tsconfig).
//!
//! Locations resolve by precedence: entry override, then spec-level override,
//! then the configs bundled under `node_modules/esnext-build/lib`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;

/// Optional overrides, as written in a spec or an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eslint_config_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylelint_config_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel_config_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_config_path: Option<PathBuf>,
}

/// Fully resolved locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfigPaths {
    pub eslint: PathBuf,
    pub stylelint: PathBuf,
    pub babel: PathBuf,
    pub tsconfig: PathBuf,
}

impl ToolConfigPaths {
    /// Configs shipped with the package.
    pub fn builtin(layout: &ProjectLayout) -> Self {
        let lib = layout.lib_dir();
        Self {
            eslint: lib.join(".eslintrc"),
            stylelint: lib.join(".stylelintrc"),
            babel: lib.join("babel.config.js"),
            tsconfig: lib.join("tsconfig.json"),
        }
    }

    /// Returns a copy where every set override shadows the current location.
    pub fn with_overrides(&self, overrides: &ToolConfigOverrides) -> Self {
        Self {
            eslint: pick(&overrides.eslint_config_path, &self.eslint),
            stylelint: pick(&overrides.stylelint_config_path, &self.stylelint),
            babel: pick(&overrides.babel_config_path, &self.babel),
            tsconfig: pick(&overrides.ts_config_path, &self.tsconfig),
        }
    }
}

// Empty strings count as unset.
fn pick(candidate: &Option<PathBuf>, fallback: &PathBuf) -> PathBuf {
    candidate
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or(fallback)
        .clone()
}
