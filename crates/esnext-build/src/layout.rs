//! Fixed project directory layout.
//!
//! Every path emitted into a bundler configuration is absolute and rooted at
//! either `<root>/src` or `<root>/dist`.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::defaults::{
    CSS_GLOBAL_DIR_NAME, CSS_MODULE_DIR_NAME, OUTPUT_DIR_NAME, PACKAGE_NAME, SOURCE_DIR_NAME,
};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root`. Relative roots are resolved against the
    /// current directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()?.join(root)
        };
        Ok(Self { root: root.clean() })
    }

    pub fn from_current_dir() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR_NAME)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR_NAME)
    }

    /// Stylesheets compiled with global class names when CSS modules are on.
    pub fn css_global_dir(&self) -> PathBuf {
        self.source_dir().join(CSS_GLOBAL_DIR_NAME)
    }

    /// Stylesheets compiled with locally scoped class names.
    pub fn css_module_dir(&self) -> PathBuf {
        self.source_dir().join(CSS_MODULE_DIR_NAME)
    }

    pub fn node_modules_dir(&self) -> PathBuf {
        self.root.join("node_modules")
    }

    /// Directory shipping the built-in lint, transpile and type-check configs.
    pub fn lib_dir(&self) -> PathBuf {
        self.node_modules_dir().join(PACKAGE_NAME).join("lib")
    }

    pub fn resolve_in_source(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.source_dir(), path.as_ref())
    }

    pub fn resolve_in_output(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.output_dir(), path.as_ref())
    }

    pub fn resolve_node_module(&self, name: &str) -> PathBuf {
        resolve(&self.node_modules_dir(), Path::new(name))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        base.join(path).clean()
    }
}
