use crate::bundler::OutputConfig;
use crate::defaults::POLYFILLS_MODULE;
use crate::layout::ProjectLayout;

/// Entry module list; the polyfill module goes first when requested.
pub fn define_entry(use_polyfills: bool, entry_file: &str) -> Vec<String> {
    if use_polyfills {
        vec![POLYFILLS_MODULE.to_string(), entry_file.to_string()]
    } else {
        vec![entry_file.to_string()]
    }
}

pub fn define_output(layout: &ProjectLayout, script_output_filename: &str) -> OutputConfig {
    OutputConfig {
        path: layout.output_dir(),
        filename: script_output_filename.to_string(),
    }
}
