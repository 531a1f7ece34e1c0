// Fixed names and serde defaults

/// Package name used to locate the bundled tool configs under `node_modules`.
pub const PACKAGE_NAME: &str = "esnext-build";

pub const POLYFILLS_MODULE: &str = "core-js/stable";

pub const SOURCE_DIR_NAME: &str = "src";
pub const OUTPUT_DIR_NAME: &str = "dist";
pub const CSS_GLOBAL_DIR_NAME: &str = "styles";
pub const CSS_MODULE_DIR_NAME: &str = "components";
pub const ROOT_HTML_FILE: &str = "index.html";

pub const VALID_FILE_EXTENSIONS: [&str; 6] = [".ts", ".tsx", ".js", ".jsx", ".scss", ".css"];
pub const STYLE_FILE_EXTENSIONS: [&str; 2] = [".scss", ".css"];
pub const SCRIPT_RESOLVE_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

pub(crate) fn default_true() -> bool {
    true
}
