//! End-to-end compilation of whole specs.

use esnext_build::{
    compile, Argv, BundlerConfig, ConfigError, CssLoaderOptions, Devtool, EntrySpec, GlobalSpec,
    Loader, MemorySourceTree, ModuleFormat, Plugin, ProjectLayout,
};
use serde_json::json;
use std::path::PathBuf;

fn layout() -> ProjectLayout {
    ProjectLayout::new("/project").expect("layout")
}

fn compile_value(value: serde_json::Value) -> Result<Vec<BundlerConfig>, ConfigError> {
    let spec = GlobalSpec::from_value(value)?;
    compile(&spec, &layout(), &MemorySourceTree::new())
}

fn ignored_files(config: &BundlerConfig) -> Vec<String> {
    config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            Plugin::IgnoreEmit(options) => Some(options.ignore.clone()),
            _ => None,
        })
        .expect("ignore-emit plugin is always present")
}

fn style_filename(config: &BundlerConfig) -> String {
    config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            Plugin::ExtractStyles(options) => Some(options.filename.clone()),
            _ => None,
        })
        .expect("extract-styles plugin is always present")
}

#[test]
fn script_and_css_module_entries() {
    let configs = compile_value(json!({
        "entries": {
            "bundle": { "file": "index.js" },
            "styles": { "file": "styles/app.scss", "useCssModules": true }
        }
    }))
    .unwrap();

    assert_eq!(configs.len(), 2);

    let bundle = &configs[0];
    assert_eq!(bundle.entry, vec!["index.js"]);
    assert_eq!(bundle.output.filename, "bundle.js");
    assert!(ignored_files(bundle).is_empty());
    assert_eq!(bundle.style_rules().count(), 1);

    let styles = &configs[1];
    assert_eq!(ignored_files(styles), vec!["styles.js"]);
    assert_eq!(style_filename(styles), "styles.css");

    let branches: Vec<_> = styles.style_rules().collect();
    assert_eq!(branches.len(), 2);
    assert_eq!(
        branches[0].include,
        vec![PathBuf::from("/project/src/components")]
    );
    assert!(branches[0]
        .use_loaders
        .contains(&Loader::Css(CssLoaderOptions::scoped())));
    assert_eq!(branches[1].include, vec![PathBuf::from("/project/src/styles")]);
    assert!(branches[1]
        .use_loaders
        .contains(&Loader::Css(CssLoaderOptions::global())));
}

#[test]
fn non_list_plugins_abort_the_batch() {
    let err = compile_value(json!({
        "entries": {
            "bundle": { "file": "index.js" },
            "broken": { "file": "index.js", "plugins": "not-an-array" }
        }
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPlugins { .. }));
    assert_eq!(err.entry_key(), Some("broken"));
}

#[test]
fn null_plugins_abort_the_batch() {
    let err = compile_value(json!({
        "entries": { "bundle": { "file": "index.js", "plugins": null } }
    }))
    .unwrap_err();

    match err {
        ConfigError::InvalidPlugins { key, plugins } => {
            assert_eq!(key, "bundle");
            assert_eq!(plugins, "null");
        }
        other => panic!("expected InvalidPlugins, got {other:?}"),
    }
}

#[test]
fn null_prod_flag_selects_production() {
    let configs = compile_value(json!({
        "entries": { "bundle": { "file": "index.ts" } },
        "argv": { "prod": null }
    }))
    .unwrap();

    assert!(!configs[0].dev_server.hot);
    assert_eq!(serde_json::to_value(&configs[0]).unwrap()["mode"], "production");
}

#[test]
fn env_is_rejected_regardless_of_entries() {
    for entries in [
        json!({}),
        json!({ "a": { "file": "a.ts" } }),
        json!({ "bad": { "file": "a.txt" }, "a": { "file": "a.ts" } }),
    ] {
        let err = compile_value(json!({ "entries": entries, "env": { "prod": true } })).unwrap_err();
        assert!(matches!(err, ConfigError::CallerMisuse));
    }
}

#[test]
fn skip_linting_removes_rule_and_plugin() {
    let configs = compile_value(json!({
        "entries": {
            "linted": { "file": "index.ts" },
            "unlinted": { "file": "index.ts", "skipLinting": true }
        }
    }))
    .unwrap();

    assert!(configs[0].lint_rule().is_some());
    assert!(configs[0].find_plugin(Plugin::LINT_STYLES).is_some());
    assert!(configs[1].lint_rule().is_none());
    assert!(configs[1].find_plugin(Plugin::LINT_STYLES).is_none());
}

#[test]
fn polyfills_change_entry_and_module_format() {
    let configs = compile_value(json!({
        "entries": {
            "legacy": { "file": "index.ts", "usePolyfills": true },
            "modern": { "file": "index.ts" }
        }
    }))
    .unwrap();

    let module_of = |config: &BundlerConfig| match config.ts_rule().and_then(|r| r.loader.clone()) {
        Some(Loader::TypeScript(options)) => options.compiler_options.module,
        other => panic!("expected ts-loader, got {other:?}"),
    };

    assert_eq!(configs[0].entry, vec!["core-js/stable", "index.ts"]);
    assert_eq!(module_of(&configs[0]), ModuleFormat::CommonJs);
    assert_eq!(configs[1].entry, vec!["index.ts"]);
    assert_eq!(module_of(&configs[1]), ModuleFormat::Es6);
}

#[test]
fn production_mode_switches_debug_features_off() {
    let spec = GlobalSpec::default()
        .with_entry("bundle", EntrySpec::new("index.tsx"))
        .with_argv(Argv::production());
    let configs = compile(&spec, &layout(), &MemorySourceTree::new()).unwrap();
    let config = &configs[0];

    assert_eq!(config.devtool, Devtool::Disabled);
    assert!(!config.dev_server.hot);
    match config.find_plugin(Plugin::OPTIMIZE_STYLES) {
        Some(Plugin::OptimizeStyles(options)) => assert!(options.css_processor_options.minimize),
        other => panic!("expected optimize plugin, got {other:?}"),
    }
}

#[test]
fn global_and_entry_tool_paths_take_precedence() {
    let configs = compile_value(json!({
        "eslintConfigPath": "/global/.eslintrc",
        "babelConfigPath": "/global/babel.config.js",
        "entries": {
            "a": { "file": "a.jsx", "eslintConfigPath": "/entry/.eslintrc" },
            "b": { "file": "b.jsx" }
        }
    }))
    .unwrap();

    let eslint_of = |config: &BundlerConfig| match config.lint_rule().and_then(|r| r.loader.clone()) {
        Some(Loader::Eslint(options)) => options.config_file,
        other => panic!("expected eslint-loader, got {other:?}"),
    };

    assert_eq!(eslint_of(&configs[0]), PathBuf::from("/entry/.eslintrc"));
    assert_eq!(eslint_of(&configs[1]), PathBuf::from("/global/.eslintrc"));
}

#[test]
fn tool_overrides_do_not_leak_between_calls() {
    let first = compile_value(json!({
        "tsConfigPath": "/custom/tsconfig.json",
        "entries": { "a": { "file": "a.ts" } }
    }))
    .unwrap();
    let second = compile_value(json!({ "entries": { "a": { "file": "a.ts" } } })).unwrap();

    let tsconfig_of = |config: &BundlerConfig| match config.ts_rule().and_then(|r| r.loader.clone()) {
        Some(Loader::TypeScript(options)) => options.config_file,
        other => panic!("expected ts-loader, got {other:?}"),
    };

    assert_eq!(tsconfig_of(&first[0]), PathBuf::from("/custom/tsconfig.json"));
    assert_eq!(
        tsconfig_of(&second[0]),
        PathBuf::from("/project/node_modules/esnext-build/lib/tsconfig.json")
    );
}

#[test]
fn serialized_config_has_bundler_keys() {
    let configs = compile_value(json!({
        "allowCors": true,
        "useHttps": false,
        "aliases": { "Data": "data" },
        "nodeModulesToBabel": ["esm-only-pkg"],
        "entries": { "bundle": { "file": "index.jsx" } }
    }))
    .unwrap();

    let value = configs[0].to_value().unwrap();
    for key in [
        "entry",
        "output",
        "mode",
        "context",
        "resolve",
        "devtool",
        "performance",
        "stats",
        "devServer",
        "module",
        "plugins",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    assert_eq!(value["mode"], json!("development"));
    assert_eq!(value["devtool"], json!("eval"));
    assert_eq!(value["performance"], json!({ "hints": false }));
    assert_eq!(value["resolve"]["alias"], json!({ "Data": "/project/src/data" }));
    assert_eq!(
        value["devServer"],
        json!({
            "contentBase": "/project/dist",
            "hot": true,
            "historyApiFallback": true,
            "https": false,
            "headers": { "Access-Control-Allow-Origin": "*" }
        })
    );

    let babel = &value["module"]["rules"][2];
    assert_eq!(babel["loader"], json!("babel-loader"));
    assert_eq!(
        babel["include"],
        json!(["/project/src", "/project/node_modules/esm-only-pkg"])
    );
}

#[test]
fn custom_plugins_come_last_in_order() {
    let configs = compile_value(json!({
        "entries": {
            "bundle": {
                "file": "index.ts",
                "plugins": [
                    { "plugin": "define-plugin", "options": { "VERSION": "\"1.0\"" } },
                    { "plugin": "bundle-analyzer" }
                ]
            }
        }
    }))
    .unwrap();

    let names: Vec<_> = configs[0].plugins.iter().map(Plugin::name).collect();
    assert_eq!(&names[names.len() - 2..], &["define-plugin", "bundle-analyzer"]);
}
