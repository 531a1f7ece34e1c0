//! Config assembler: joins the fragments for one entry into a [`BundlerConfig`].
//!
//! Fragments own disjoint keys, so assembly is a plain destructure; no value
//! produced by one builder is ever overwritten by another.

use indexmap::IndexMap;
use std::path::PathBuf;

use crate::bundler::{BundlerConfig, ModuleConfig};
use crate::entry::ResolvedEntry;
use crate::fragments::{
    common_settings, define_entry, define_output, dev_server_settings, plugins_for_entry,
    rules_for_scripts, rules_for_styles, CommonSettings, PluginInputs, ScriptRuleInputs,
};
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

/// Inputs shared by every entry of one batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchContext<'a> {
    pub layout: &'a ProjectLayout,
    pub mode: BuildMode,
    pub aliases: &'a IndexMap<String, PathBuf>,
    /// Absolute package directories
    pub node_modules_to_babel: &'a [PathBuf],
    pub use_https: bool,
    pub allow_cors: bool,
}

/// Builds the full configuration for one entry.
///
/// `copy_root_html` is the result of the caller's `src/index.html`
/// existence check.
pub fn generate_config(
    entry: &ResolvedEntry,
    ctx: &BatchContext<'_>,
    copy_root_html: bool,
) -> BundlerConfig {
    let CommonSettings {
        mode,
        context,
        resolve,
        devtool,
        performance,
        stats,
    } = common_settings(ctx.layout, ctx.mode, ctx.aliases);

    let mut rules = rules_for_scripts(ScriptRuleInputs {
        layout: ctx.layout,
        node_modules_to_babel: ctx.node_modules_to_babel,
        use_polyfills: entry.use_polyfills,
        skip_linting: entry.skip_linting,
        tool_configs: &entry.tool_configs,
    });
    rules.extend(rules_for_styles(ctx.layout, ctx.mode, entry.use_css_modules));

    let plugins = plugins_for_entry(PluginInputs {
        layout: ctx.layout,
        mode: ctx.mode,
        skip_linting: entry.skip_linting,
        stylelint_config: &entry.tool_configs.stylelint,
        style_output_filename: &entry.style_output_filename,
        copy_root_html,
        ignored_output_files: &entry.ignored_output_files,
        extra_plugins: &entry.plugins,
    });

    BundlerConfig {
        entry: define_entry(entry.use_polyfills, &entry.file),
        output: define_output(ctx.layout, &entry.script_output_filename),
        mode,
        context,
        resolve,
        devtool,
        performance,
        stats,
        dev_server: dev_server_settings(ctx.layout, ctx.mode, ctx.use_https, ctx.allow_cors),
        module: ModuleConfig { rules },
        plugins,
    }
}
