//! Read access to the project source directory.
//!
//! The compiler asks a [`SourceTree`] whether optional files exist instead of
//! touching the filesystem itself, so tests and in-memory callers can supply
//! their own tree.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::layout::ProjectLayout;

pub trait SourceTree {
    /// Whether `relative` (relative to the source directory) exists.
    fn contains(&self, relative: &Path) -> bool;
}

/// Filesystem-backed tree rooted at the project's `src` directory.
///
/// # Example
///
/// ```no_run
/// use esnext_build::{FsSourceTree, ProjectLayout, SourceTree};
/// use std::path::Path;
///
/// let layout = ProjectLayout::from_current_dir().unwrap();
/// let tree = FsSourceTree::new(&layout);
/// let has_html = tree.contains(Path::new("index.html"));
/// ```
#[derive(Debug, Clone)]
pub struct FsSourceTree {
    source_dir: PathBuf,
}

impl FsSourceTree {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            source_dir: layout.source_dir(),
        }
    }
}

impl SourceTree for FsSourceTree {
    fn contains(&self, relative: &Path) -> bool {
        self.source_dir.join(relative).exists()
    }
}

/// Fixed set of files, for library callers working on virtual trees.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceTree {
    files: HashSet<PathBuf>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative: impl Into<PathBuf>) -> Self {
        self.files.insert(relative.into());
        self
    }
}

impl SourceTree for MemorySourceTree {
    fn contains(&self, relative: &Path) -> bool {
        self.files.contains(relative)
    }
}
