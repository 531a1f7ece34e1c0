use crate::bundler::Mode;
use crate::spec::Argv;

/// Build flags derived once per batch from `argv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// True unless `argv.prod` is present.
    pub dev_mode: bool,
    /// Set by `argv.analyze`. Carried for callers; it does not alter the
    /// generated configuration.
    pub analyze: bool,
}

impl BuildMode {
    pub const DEVELOPMENT: BuildMode = BuildMode {
        dev_mode: true,
        analyze: false,
    };

    pub const PRODUCTION: BuildMode = BuildMode {
        dev_mode: false,
        analyze: false,
    };

    pub fn from_argv(argv: Option<&Argv>) -> Self {
        match argv {
            Some(argv) => Self {
                dev_mode: argv.prod.is_none(),
                analyze: argv.analyze.is_some(),
            },
            None => Self::DEVELOPMENT,
        }
    }

    pub fn bundler_mode(&self) -> Mode {
        if self.dev_mode {
            Mode::Development
        } else {
            Mode::Production
        }
    }
}
