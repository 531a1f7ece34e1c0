use std::path::PathBuf;

use crate::bundler::{
    BabelLoaderOptions, Enforce, EslintLoaderOptions, Loader, ModuleFormat, Rule,
    TsCompilerOptions, TsLoaderOptions,
};
use crate::layout::ProjectLayout;
use crate::tools::ToolConfigPaths;

pub const SCRIPT_TEST: &str = r"\.(tsx?|jsx?)$";
pub const TYPESCRIPT_TEST: &str = r"\.tsx?$";
pub const JSX_TEST: &str = r"\.jsx$";

#[derive(Debug, Clone, Copy)]
pub struct ScriptRuleInputs<'a> {
    pub layout: &'a ProjectLayout,
    /// Absolute package directories that also go through babel
    pub node_modules_to_babel: &'a [PathBuf],
    pub use_polyfills: bool,
    pub skip_linting: bool,
    pub tool_configs: &'a ToolConfigPaths,
}

/// Lint (unless skipped), TypeScript, then JSX rules.
pub fn rules_for_scripts(inputs: ScriptRuleInputs<'_>) -> Vec<Rule> {
    let ScriptRuleInputs {
        layout,
        node_modules_to_babel,
        use_polyfills,
        skip_linting,
        tool_configs,
    } = inputs;

    let mut rules = Vec::with_capacity(3);

    if !skip_linting {
        rules.push(
            Rule::with_loader(
                SCRIPT_TEST,
                Loader::Eslint(EslintLoaderOptions {
                    config_file: tool_configs.eslint.clone(),
                    fix: true,
                }),
            )
            .enforce(Enforce::Pre)
            .include([layout.source_dir()]),
        );
    }

    rules.push(Rule::with_loader(
        TYPESCRIPT_TEST,
        Loader::TypeScript(TsLoaderOptions {
            config_file: tool_configs.tsconfig.clone(),
            transpile_only: true,
            compiler_options: TsCompilerOptions {
                base_url: layout.source_dir(),
                out_dir: layout.output_dir(),
                module: if use_polyfills {
                    ModuleFormat::CommonJs
                } else {
                    ModuleFormat::Es6
                },
            },
        }),
    ));

    rules.push(
        Rule::with_loader(
            JSX_TEST,
            Loader::Babel(BabelLoaderOptions {
                config_file: tool_configs.babel.clone(),
            }),
        )
        .include(std::iter::once(layout.source_dir()).chain(node_modules_to_babel.iter().cloned())),
    );

    rules
}
