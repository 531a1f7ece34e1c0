use serde::Serialize;
use std::path::PathBuf;

/// A loader reference with its options, serialized as
/// `{ "loader": <package>, "options": { .. } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "loader", content = "options")]
pub enum Loader {
    #[serde(rename = "eslint-loader")]
    Eslint(EslintLoaderOptions),
    #[serde(rename = "ts-loader")]
    TypeScript(TsLoaderOptions),
    #[serde(rename = "babel-loader")]
    Babel(BabelLoaderOptions),
    #[serde(rename = "extract-css-chunks-webpack-plugin/dist/loader")]
    ExtractCss(ExtractCssLoaderOptions),
    #[serde(rename = "css-loader")]
    Css(CssLoaderOptions),
    #[serde(rename = "postcss-loader")]
    PostCss(PostCssLoaderOptions),
    #[serde(rename = "sass-loader")]
    Sass(SassLoaderOptions),
}

impl Loader {
    pub fn name(&self) -> &'static str {
        match self {
            Loader::Eslint(_) => "eslint-loader",
            Loader::TypeScript(_) => "ts-loader",
            Loader::Babel(_) => "babel-loader",
            Loader::ExtractCss(_) => "extract-css-chunks-webpack-plugin/dist/loader",
            Loader::Css(_) => "css-loader",
            Loader::PostCss(_) => "postcss-loader",
            Loader::Sass(_) => "sass-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintLoaderOptions {
    pub config_file: PathBuf,
    pub fix: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsLoaderOptions {
    pub config_file: PathBuf,
    /// Skip type-checking, transpile only
    pub transpile_only: bool,
    pub compiler_options: TsCompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsCompilerOptions {
    pub base_url: PathBuf,
    pub out_dir: PathBuf,
    pub module: ModuleFormat,
}

/// Module format emitted by the TypeScript transpiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleFormat {
    /// Needed when polyfills are injected
    #[serde(rename = "commonjs")]
    CommonJs,
    #[serde(rename = "es6")]
    Es6,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelLoaderOptions {
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtractCssLoaderOptions {
    pub hot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssLoaderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<bool>,

    /// `url()` rewriting; always off
    pub url: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locals_convention: Option<LocalsConvention>,
}

impl CssLoaderOptions {
    /// Global class names.
    pub fn global() -> Self {
        Self {
            modules: None,
            url: false,
            locals_convention: None,
        }
    }

    /// Locally scoped class names exported in camelCase only.
    pub fn scoped() -> Self {
        Self {
            modules: Some(true),
            url: false,
            locals_convention: Some(LocalsConvention::CamelCaseOnly),
        }
    }

    pub fn is_scoped(&self) -> bool {
        self.modules == Some(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocalsConvention {
    #[serde(rename = "camelCaseOnly")]
    CamelCaseOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCssLoaderOptions {
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SassLoaderOptions {
    pub implementation: String,
    /// Injected ahead of every stylesheet
    pub prepend_data: String,
    pub sass_options: SassOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SassOptions {
    pub fiber: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loader_serializes_with_name_and_options() {
        let loader = Loader::Babel(BabelLoaderOptions {
            config_file: PathBuf::from("/lib/babel.config.js"),
        });
        assert_eq!(
            serde_json::to_value(&loader).unwrap(),
            json!({
                "loader": "babel-loader",
                "options": { "configFile": "/lib/babel.config.js" }
            })
        );
        assert_eq!(loader.name(), "babel-loader");
    }

    #[test]
    fn css_loader_variants() {
        assert_eq!(
            serde_json::to_value(CssLoaderOptions::global()).unwrap(),
            json!({ "url": false })
        );
        assert_eq!(
            serde_json::to_value(CssLoaderOptions::scoped()).unwrap(),
            json!({ "modules": true, "url": false, "localsConvention": "camelCaseOnly" })
        );
    }

    #[test]
    fn module_format_names() {
        assert_eq!(
            serde_json::to_value(ModuleFormat::CommonJs).unwrap(),
            json!("commonjs")
        );
        assert_eq!(serde_json::to_value(ModuleFormat::Es6).unwrap(), json!("es6"));
    }
}
