use std::path::Path;

use crate::bundler::{
    CopyFilesOptions, CopyPattern, CssProcessorOptions, CustomPlugin, ExtractStylesOptions,
    IgnoreEmitOptions, LintStylesOptions, OptimizeStylesOptions, Plugin, StyleSourceMap,
};
use crate::defaults::ROOT_HTML_FILE;
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

pub fn plugin_lint_styles(stylelint_config: &Path) -> Plugin {
    Plugin::LintStyles(LintStylesOptions {
        config_file: stylelint_config.to_path_buf(),
        fix: true,
        allow_empty_input: true,
    })
}

pub fn plugin_extract_styles(style_output_filename: &str) -> Plugin {
    Plugin::ExtractStyles(ExtractStylesOptions {
        filename: style_output_filename.to_string(),
        chunk_filename: "[id].css".to_string(),
    })
}

/// Minifies in production; writes a separate style source map in development.
pub fn plugin_optimize_styles(mode: BuildMode) -> Plugin {
    Plugin::OptimizeStyles(OptimizeStylesOptions {
        css_processor_options: CssProcessorOptions {
            minimize: !mode.dev_mode,
            map: mode.dev_mode.then_some(StyleSourceMap {
                inline: false,
                annotation: true,
            }),
        },
    })
}

/// Copies each `(from, to)` pair, `from` relative to the source directory and
/// `to` relative to the output directory.
pub fn plugin_copy_files<'a>(
    layout: &ProjectLayout,
    patterns: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Plugin {
    Plugin::CopyFiles(CopyFilesOptions {
        patterns: patterns
            .into_iter()
            .map(|(from, to)| CopyPattern {
                from: layout.resolve_in_source(from),
                to: layout.resolve_in_output(to),
            })
            .collect(),
        info: true,
    })
}

pub fn plugin_ignore_output(filenames: &[String]) -> Plugin {
    Plugin::IgnoreEmit(IgnoreEmitOptions {
        ignore: filenames.to_vec(),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct PluginInputs<'a> {
    pub layout: &'a ProjectLayout,
    pub mode: BuildMode,
    pub skip_linting: bool,
    pub stylelint_config: &'a Path,
    pub style_output_filename: &'a str,
    /// Whether `src/index.html` exists and should be copied to the output
    pub copy_root_html: bool,
    pub ignored_output_files: &'a [String],
    /// Appended last, in order
    pub extra_plugins: &'a [CustomPlugin],
}

pub fn plugins_for_entry(inputs: PluginInputs<'_>) -> Vec<Plugin> {
    let mut plugins = Vec::with_capacity(5 + inputs.extra_plugins.len());

    if !inputs.skip_linting {
        plugins.push(plugin_lint_styles(inputs.stylelint_config));
    }
    plugins.push(plugin_extract_styles(inputs.style_output_filename));
    plugins.push(plugin_optimize_styles(inputs.mode));
    if inputs.copy_root_html {
        plugins.push(plugin_copy_files(
            inputs.layout,
            [(ROOT_HTML_FILE, ROOT_HTML_FILE)],
        ));
    }
    plugins.push(plugin_ignore_output(inputs.ignored_output_files));
    plugins.extend(inputs.extra_plugins.iter().cloned().map(Plugin::Custom));

    plugins
}
