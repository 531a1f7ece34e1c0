//! `esnext-build` binary entry point.

use clap::Parser;
use esnext_build_cli::{cli, commands, error, logger, GenerateOptions};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    if args.no_color {
        miette::set_hook(Box::new(|_| {
            Box::new(miette::MietteHandlerOpts::new().color(false).build())
        }))
        .map_err(|e| miette::miette!("{e}"))?;
    }

    let result = commands::generate_execute(GenerateOptions::from(&args));

    // Errors leave through miette, which exits with status 1
    result.map_err(error::cli_error_to_miette)
}
