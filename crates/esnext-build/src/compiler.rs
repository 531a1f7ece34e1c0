//! Batch compiler: the top-level entry point.

use std::path::{Path, PathBuf};

use crate::assembler::{generate_config, BatchContext};
use crate::bundler::BundlerConfig;
use crate::defaults::ROOT_HTML_FILE;
use crate::entry::normalize_entry;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;
use crate::source_tree::{FsSourceTree, SourceTree};
use crate::spec::GlobalSpec;
use crate::tools::ToolConfigPaths;

/// Compiles every entry of `spec` into a bundler configuration.
///
/// Configurations come back in entry declaration order. The first invalid
/// entry aborts the batch and nothing is returned for the others.
///
/// # Example
///
/// ```
/// use esnext_build::{compile, EntrySpec, GlobalSpec, MemorySourceTree, ProjectLayout};
///
/// let spec = GlobalSpec::default()
///     .with_entry("bundle", EntrySpec::new("index.js"))
///     .with_entry("styles", EntrySpec::new("styles/app.scss").css_modules(true));
///
/// let layout = ProjectLayout::new("/project").unwrap();
/// let configs = compile(&spec, &layout, &MemorySourceTree::new()).unwrap();
///
/// assert_eq!(configs.len(), 2);
/// assert_eq!(configs[0].output.filename, "bundle.js");
/// ```
pub fn compile<T>(spec: &GlobalSpec, layout: &ProjectLayout, tree: &T) -> Result<Vec<BundlerConfig>>
where
    T: SourceTree + ?Sized,
{
    if spec.env.is_some() {
        return Err(ConfigError::CallerMisuse);
    }

    let mode = BuildMode::from_argv(spec.argv.as_ref());
    let tool_defaults = ToolConfigPaths::builtin(layout).with_overrides(&spec.tool_configs);
    let node_modules_to_babel: Vec<PathBuf> = spec
        .node_modules_to_babel
        .iter()
        .map(|name| layout.resolve_node_module(name))
        .collect();

    if mode.analyze {
        tracing::debug!("analyze flag set");
    }

    let copy_root_html = tree.contains(Path::new(ROOT_HTML_FILE));

    let ctx = BatchContext {
        layout,
        mode,
        aliases: &spec.aliases,
        node_modules_to_babel: &node_modules_to_babel,
        use_https: spec.use_https,
        allow_cors: spec.allow_cors,
    };

    let configs = spec
        .entries
        .iter()
        .map(|(key, entry_spec)| -> Result<BundlerConfig> {
            let entry = normalize_entry(key, entry_spec, &tool_defaults)?;
            tracing::debug!(
                key = %entry.key,
                file = %entry.file,
                output = %entry.script_output_filename,
                style_only = entry.is_style_entry(),
                "generating config"
            );
            Ok(generate_config(&entry, &ctx, copy_root_html))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        entries = configs.len(),
        dev_mode = mode.dev_mode,
        "compiled bundler configs"
    );

    Ok(configs)
}

/// [`compile`] against the real filesystem under `root`.
pub fn compile_project(spec: &GlobalSpec, root: impl AsRef<Path>) -> Result<Vec<BundlerConfig>> {
    let layout = ProjectLayout::new(root)?;
    let tree = FsSourceTree::new(&layout);
    compile(spec, &layout, &tree)
}
