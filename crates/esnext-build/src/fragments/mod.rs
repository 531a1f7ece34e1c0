//! Fragment builders.
//!
//! Each builder is a pure function of its arguments and produces one disjoint
//! slice of a [`BundlerConfig`](crate::bundler::BundlerConfig). None of them
//! reads another builder's output; the assembler stitches the slices together.

mod common;
mod dev_server;
mod entry_output;
mod plugins;
mod scripts;
mod styles;

pub use common::{common_settings, CommonSettings};
pub use dev_server::dev_server_settings;
pub use entry_output::{define_entry, define_output};
pub use plugins::{
    plugin_copy_files, plugin_extract_styles, plugin_ignore_output, plugin_lint_styles,
    plugin_optimize_styles, plugins_for_entry, PluginInputs,
};
pub use scripts::{rules_for_scripts, ScriptRuleInputs, JSX_TEST, SCRIPT_TEST, TYPESCRIPT_TEST};
pub use styles::{rules_for_styles, style_loaders, STYLE_TEST};
