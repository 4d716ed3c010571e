//! Logging setup shared by the binaries

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Everything down to debug
    Verbose,
}

impl Verbosity {
    /// Map `--verbose`/`--quiet`; quiet wins if both are set
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is a no-op.
pub fn init_logging(verbosity: Verbosity) {
    let level = verbosity.to_level();
    let default_filter = format!("fleet_app={level},fleet_store={level},fleet_manager={level},fleet_manager_gui={level}");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::from_flags(true, false).to_level(), Level::DEBUG);
        assert_eq!(Verbosity::from_flags(false, false).to_level(), Level::WARN);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true).to_level(), Level::ERROR);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Verbose);
    }
}
