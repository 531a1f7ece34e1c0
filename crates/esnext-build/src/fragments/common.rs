use indexmap::IndexMap;
use std::path::PathBuf;

use crate::bundler::{
    Devtool, Mode, PerformanceConfig, PerformanceHints, ResolveConfig, Stats,
};
use crate::defaults::SCRIPT_RESOLVE_EXTENSIONS;
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

/// Mode, resolution and diagnostics settings shared by every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSettings {
    pub mode: Mode,
    pub context: PathBuf,
    pub resolve: ResolveConfig,
    pub devtool: Devtool,
    pub performance: PerformanceConfig,
    pub stats: Stats,
}

/// Aliases are resolved against the source directory, keeping their order.
pub fn common_settings(
    layout: &ProjectLayout,
    mode: BuildMode,
    aliases: &IndexMap<String, PathBuf>,
) -> CommonSettings {
    let alias = aliases
        .iter()
        .map(|(name, path)| (name.clone(), layout.resolve_in_source(path)))
        .collect();

    CommonSettings {
        mode: mode.bundler_mode(),
        context: layout.source_dir(),
        resolve: ResolveConfig {
            extensions: SCRIPT_RESOLVE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            alias,
        },
        devtool: if mode.dev_mode {
            Devtool::Eval
        } else {
            Devtool::Disabled
        },
        performance: PerformanceConfig {
            hints: if mode.dev_mode {
                PerformanceHints::Off
            } else {
                PerformanceHints::Warning
            },
        },
        stats: Stats::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/project").unwrap()
    }

    #[test]
    fn dev_mode_settings() {
        let settings = common_settings(&layout(), BuildMode::DEVELOPMENT, &IndexMap::new());
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.devtool, Devtool::Eval);
        assert_eq!(settings.performance.hints, PerformanceHints::Off);
        assert_eq!(settings.context, PathBuf::from("/project/src"));
        assert_eq!(settings.resolve.extensions, vec![".ts", ".tsx", ".js", ".jsx"]);
    }

    #[test]
    fn prod_mode_settings() {
        let settings = common_settings(&layout(), BuildMode::PRODUCTION, &IndexMap::new());
        assert_eq!(settings.mode, Mode::Production);
        assert_eq!(settings.devtool, Devtool::Disabled);
        assert_eq!(settings.performance.hints, PerformanceHints::Warning);
        assert_eq!(settings.stats, Stats::Normal);
    }

    #[test]
    fn aliases_resolve_under_source_in_order() {
        let mut aliases = IndexMap::new();
        aliases.insert("Types".to_string(), PathBuf::from("types"));
        aliases.insert("Data".to_string(), PathBuf::from("data"));

        let settings = common_settings(&layout(), BuildMode::DEVELOPMENT, &aliases);
        let resolved: Vec<_> = settings.resolve.alias.into_iter().collect();
        assert_eq!(
            resolved,
            vec![
                ("Types".to_string(), PathBuf::from("/project/src/types")),
                ("Data".to_string(), PathBuf::from("/project/src/data")),
            ]
        );
    }
}
