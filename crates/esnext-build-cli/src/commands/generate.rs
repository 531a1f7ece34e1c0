//! Load a spec, compile it and write the configs as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use esnext_build::{compile_project, load_spec, Argv, BundlerConfig, ConfigDiscovery, GlobalSpec};
use serde_json::Value;

use crate::cli::Cli;
use crate::error::{Result, ResultExt};
use crate::logger::should_use_colors;
use crate::ui;

/// Options for one generate run, taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub prod: bool,
    pub analyze: bool,
    pub out: Option<PathBuf>,
    pub compact: bool,
    /// Skip status messages on stderr
    pub quiet: bool,
    pub color: bool,
}

impl From<&Cli> for GenerateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            root: cli.root.clone(),
            prod: cli.prod,
            analyze: cli.analyze,
            out: cli.out.clone(),
            compact: cli.compact,
            quiet: cli.quiet,
            color: !cli.no_color && should_use_colors(),
        }
    }
}

pub fn execute(options: GenerateOptions) -> Result<()> {
    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(std::io::Error::from(std::io::ErrorKind::NotFound)).with_path(&root);
    }

    let mut spec = load(&root, options.config.as_deref())?;
    apply_flags(&mut spec, options.prod, options.analyze);

    if spec.entries.is_empty() && !options.quiet {
        ui::warning("Spec has no entries; emitting an empty list", options.color);
    }

    let configs = compile_project(&spec, &root)?;
    let json = render(&configs, options.compact)?;

    match &options.out {
        Some(path) => {
            fs::write(path, json + "\n").with_path(path)?;
            if !options.quiet {
                ui::success(
                    &format!("Wrote {} config(s) to {}", configs.len(), path.display()),
                    options.color,
                );
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load(root: &Path, config: Option<&Path>) -> Result<GlobalSpec> {
    match config {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            tracing::debug!("Using spec file {}", path.display());
            load_spec(&path).with_path(&path)
        }
        None => {
            let discovery = ConfigDiscovery::new(root);
            Ok(discovery.load()?)
        }
    }
}

/// CLI flags only add to `argv`; a flag left off keeps what the spec says.
fn apply_flags(spec: &mut GlobalSpec, prod: bool, analyze: bool) {
    if !prod && !analyze {
        return;
    }

    let argv = spec.argv.get_or_insert_with(Argv::default);
    if prod {
        argv.prod = Some(Value::Bool(true));
    }
    if analyze {
        argv.analyze = Some(Value::Bool(true));
    }
}

fn render(configs: &[BundlerConfig], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(configs)?
    } else {
        serde_json::to_string_pretty(configs)?
    };
    Ok(json)
}
