use indexmap::IndexMap;

use crate::bundler::DevServerConfig;
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;

/// Serves the output directory; CORS opens every origin.
pub fn dev_server_settings(
    layout: &ProjectLayout,
    mode: BuildMode,
    use_https: bool,
    allow_cors: bool,
) -> DevServerConfig {
    let mut headers = IndexMap::new();
    if allow_cors {
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
    }

    DevServerConfig {
        content_base: layout.output_dir(),
        hot: mode.dev_mode,
        history_api_fallback: true,
        https: use_https,
        headers,
    }
}
