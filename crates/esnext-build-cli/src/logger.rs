//! Logging setup for the esnext-build binary.
//!
//! Log lines go to stderr so the generated JSON on stdout stays clean.
//!
//! # Verbosity
//!
//! 1. `--verbose`: DEBUG for the esnext-build crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`, when set
//! 4. Otherwise WARN

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "esnext_build=debug,esnext_build_cli=debug";
const QUIET_FILTER: &str = "esnext_build=error,esnext_build_cli=error";
const DEFAULT_FILTER: &str = "esnext_build=warn,esnext_build_cli=info";

/// Install the global tracing subscriber. Call once, before logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise ask the
/// terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
