//! Miette rendering for CLI errors.

use miette::{MietteDiagnostic, Report};

use super::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => Report::new(
            MietteDiagnostic::new(format!("File not found: {}", path.display()))
                .with_code("esnext_build::file_not_found")
                .with_help("Check the path passed to --config or --root"),
        ),
        other => miette::miette!("{}", other),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    let help = match &err {
        ConfigError::CallerMisuse => {
            Some("Put build flags under `argv`, e.g. { \"argv\": { \"prod\": true } }")
        }
        ConfigError::InvalidExtension { .. } => {
            Some("Entry files must end in .ts, .tsx, .js, .jsx, .scss or .css")
        }
        ConfigError::InvalidPlugins { .. } => {
            Some("`plugins` must be a list of { \"plugin\": ..., \"options\": ... } objects")
        }
        ConfigError::NotFound => Some(
            "Create esnext-build.json or esnext-build.toml, add an \"esnextBuild\" field to package.json, or pass --config",
        ),
        ConfigError::InvalidValue { .. } | ConfigError::Io(_) => None,
    };

    let mut diagnostic = MietteDiagnostic::new(err.to_string()).with_code(error_code(&err));
    if let Some(help) = help {
        diagnostic = diagnostic.with_help(help);
    }
    Report::new(diagnostic)
}

fn error_code(err: &ConfigError) -> &'static str {
    match err {
        ConfigError::CallerMisuse => "esnext_build::caller_misuse",
        ConfigError::InvalidExtension { .. } => "esnext_build::invalid_extension",
        ConfigError::InvalidPlugins { .. } => "esnext_build::invalid_plugins",
        ConfigError::InvalidValue { .. } => "esnext_build::invalid_value",
        ConfigError::NotFound => "esnext_build::spec_not_found",
        ConfigError::Io(_) => "esnext_build::io",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_code_and_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::InvalidPlugins {
            key: "bundle".to_string(),
            plugins: "\"not-an-array\"".to_string(),
        }));

        assert!(report.to_string().contains("entry with key bundle"));
        assert_eq!(
            report.code().map(|code| code.to_string()),
            Some("esnext_build::invalid_plugins".to_string())
        );
        assert!(report.help().is_some());
    }

    #[test]
    fn plain_errors_keep_message() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let report = cli_error_to_miette(CliError::Io(err));
        assert_eq!(report.to_string(), "I/O error: denied");
    }
}
