use crate::bundler::{
    CssLoaderOptions, ExtractCssLoaderOptions, Loader, PostCssLoaderOptions, Rule,
    SassLoaderOptions, SassOptions,
};
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

pub const STYLE_TEST: &str = r"\.(scss|css)$";

/// Extract, css, postcss and sass loaders, in that order.
pub fn style_loaders(mode: BuildMode, use_module_loaders: bool) -> Vec<Loader> {
    let env = if mode.dev_mode { "dev" } else { "prod" };

    vec![
        Loader::ExtractCss(ExtractCssLoaderOptions { hot: mode.dev_mode }),
        Loader::Css(if use_module_loaders {
            CssLoaderOptions::scoped()
        } else {
            CssLoaderOptions::global()
        }),
        Loader::PostCss(PostCssLoaderOptions {
            plugins: vec![
                "autoprefixer".to_string(),
                "postcss-sort-media-queries".to_string(),
            ],
        }),
        Loader::Sass(SassLoaderOptions {
            implementation: "sass".to_string(),
            prepend_data: format!("$env: {env};"),
            sass_options: SassOptions {
                fiber: "fibers".to_string(),
            },
        }),
    ]
}

/// With CSS modules: scoped names under `src/components`, global names under
/// `src/styles`. Without: global names across `src`.
pub fn rules_for_styles(layout: &ProjectLayout, mode: BuildMode, use_css_modules: bool) -> Vec<Rule> {
    if use_css_modules {
        vec![
            Rule::with_chain(STYLE_TEST, style_loaders(mode, true))
                .include([layout.css_module_dir()]),
            Rule::with_chain(STYLE_TEST, style_loaders(mode, false))
                .include([layout.css_global_dir()]),
        ]
    } else {
        vec![Rule::with_chain(STYLE_TEST, style_loaders(mode, false)).include([layout.source_dir()])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/project").unwrap()
    }

    fn css_options(rule: &Rule) -> CssLoaderOptions {
        rule.use_loaders
            .iter()
            .find_map(|loader| match loader {
                Loader::Css(options) => Some(*options),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn css_modules_split_into_two_branches() {
        let rules = rules_for_styles(&layout(), BuildMode::DEVELOPMENT, true);
        assert_eq!(rules.len(), 2);

        assert_eq!(rules[0].include, vec![PathBuf::from("/project/src/components")]);
        assert!(css_options(&rules[0]).is_scoped());

        assert_eq!(rules[1].include, vec![PathBuf::from("/project/src/styles")]);
        assert!(!css_options(&rules[1]).is_scoped());
    }

    #[test]
    fn global_styles_cover_source_dir() {
        let rules = rules_for_styles(&layout(), BuildMode::DEVELOPMENT, false);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].test, STYLE_TEST);
        assert_eq!(rules[0].include, vec![PathBuf::from("/project/src")]);
        assert_eq!(css_options(&rules[0]), CssLoaderOptions::global());
    }

    #[test]
    fn loader_chain_order() {
        let names: Vec<_> = style_loaders(BuildMode::DEVELOPMENT, false)
            .iter()
            .map(Loader::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "extract-css-chunks-webpack-plugin/dist/loader",
                "css-loader",
                "postcss-loader",
                "sass-loader",
            ]
        );
    }

    #[test]
    fn sass_env_and_hot_follow_mode() {
        let prod = style_loaders(BuildMode::PRODUCTION, true);
        assert_eq!(prod[0], Loader::ExtractCss(ExtractCssLoaderOptions { hot: false }));
        match &prod[3] {
            Loader::Sass(options) => assert_eq!(options.prepend_data, "$env: prod;"),
            other => panic!("expected sass loader, got {other:?}"),
        }

        let dev = style_loaders(BuildMode::DEVELOPMENT, true);
        match &dev[3] {
            Loader::Sass(options) => assert_eq!(options.prepend_data, "$env: dev;"),
            other => panic!("expected sass loader, got {other:?}"),
        }
    }
}
