//! Command-line front end for `esnext-build`.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - the generate command
//! - [`error`] - CLI errors and miette rendering
//! - [`logger`] - tracing subscriber setup
//!
//! ```rust,no_run
//! use esnext_build_cli::{commands, logger, GenerateOptions};
//!
//! logger::init_logger(false, false, true);
//! commands::generate_execute(GenerateOptions {
//!     prod: true,
//!     ..GenerateOptions::default()
//! })
//! .unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
mod ui;

pub use commands::GenerateOptions;
pub use error::{CliError, Result, ResultExt};
