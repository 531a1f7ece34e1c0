//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Compile an esnext-build spec into bundler configurations
#[derive(Parser, Debug)]
#[command(
    name = "esnext-build",
    version,
    about = "Compile an esnext-build spec into bundler configurations",
    long_about = "Reads a build spec (esnext-build.json, esnext-build.toml or the \
                  \"esnextBuild\" field of package.json) and prints one bundler\n\
                  configuration per entry as a JSON array."
)]
pub struct Cli {
    /// Spec file to load instead of searching the project root
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root holding `src/` and `dist/`
    ///
    /// Defaults to the current directory.
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Generate production configs (sets `argv.prod`)
    #[arg(long)]
    pub prod: bool,

    /// Set `argv.analyze` on the spec
    #[arg(long)]
    pub analyze: bool,

    /// Write the JSON to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
