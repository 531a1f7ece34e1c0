use serde::Serialize;
use std::path::PathBuf;

use crate::bundler::loader::Loader;

/// A module rule. Either a single `loader` (flattened into the rule as
/// `loader` + `options`) or a `use` chain applied bottom-up by the bundler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Regular expression source matched against module paths
    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    #[serde(flatten)]
    pub loader: Option<Loader>,

    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub use_loaders: Vec<Loader>,
}

impl Rule {
    pub fn with_loader(test: impl Into<String>, loader: Loader) -> Self {
        Self {
            test: test.into(),
            enforce: None,
            include: Vec::new(),
            loader: Some(loader),
            use_loaders: Vec::new(),
        }
    }

    pub fn with_chain(test: impl Into<String>, chain: Vec<Loader>) -> Self {
        Self {
            test: test.into(),
            enforce: None,
            include: Vec::new(),
            loader: None,
            use_loaders: chain,
        }
    }

    pub fn include(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.include.extend(paths);
        self
    }

    pub fn enforce(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Runs before the normal loaders; used for linting
    Pre,
}
