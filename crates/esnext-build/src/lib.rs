//! Compiles a declarative build spec into bundler configurations.
//!
//! A [`GlobalSpec`] names build entries (script or stylesheet sources) plus
//! global options. [`compile`] validates every entry, expands it through the
//! fragment builders and returns one [`BundlerConfig`] per entry, in
//! declaration order.
//!
//! ```
//! use esnext_build::{compile, Argv, EntrySpec, GlobalSpec, MemorySourceTree, ProjectLayout};
//!
//! let spec = GlobalSpec::default()
//!     .with_entry("bundle", EntrySpec::new("index.ts").polyfills(true))
//!     .with_alias("Data", "data")
//!     .with_argv(Argv::production());
//!
//! let layout = ProjectLayout::new("/project").unwrap();
//! let configs = compile(&spec, &layout, &MemorySourceTree::new()).unwrap();
//! assert_eq!(configs[0].entry, vec!["core-js/stable", "index.ts"]);
//! ```

pub mod assembler;
pub mod bundler;
pub mod compiler;
pub mod defaults;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod fragments;
pub mod layout;
pub mod mode;
pub mod source_tree;
pub mod spec;
pub mod tools;

pub use assembler::{generate_config, BatchContext};
pub use bundler::*;
pub use compiler::{compile, compile_project};
pub use discovery::{discover, load_spec, ConfigDiscovery, SpecFormat};
pub use entry::{normalize_entry, EntryKind, ResolvedEntry};
pub use error::*;
pub use layout::ProjectLayout;
pub use mode::BuildMode;
pub use source_tree::{FsSourceTree, MemorySourceTree, SourceTree};
pub use spec::{Argv, EntrySpec, GlobalSpec, PluginSpec};
pub use tools::{ToolConfigOverrides, ToolConfigPaths};
