//! Development server configuration types.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directory served as static content
    pub content_base: PathBuf,

    /// Hot module replacement
    pub hot: bool,

    /// Serve `index.html` for unknown routes
    pub history_api_fallback: bool,

    pub https: bool,

    /// Extra response headers
    pub headers: IndexMap<String, String>,
}

impl DevServerConfig {
    pub fn allows_cors(&self) -> bool {
        self.headers
            .get("Access-Control-Allow-Origin")
            .is_some_and(|origin| origin == "*")
    }
}
