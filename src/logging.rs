//! Logging setup for the `sidenav` binary.
//!
//! The library itself only emits records through the `log` facade. The
//! subscriber installed here bridges them into `tracing-subscriber`'s
//! formatter.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and above.
    #[default]
    Normal,
    /// Info and above.
    Verbose,
    /// Everything, including per-render debug records.
    Debug,
}

impl Verbosity {
    /// Verbosity from `-q` and the number of `-v` flags.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Debug,
        }
    }

    #[must_use]
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Returns `false` if a
/// subscriber was already installed, which stays in place.
pub fn init_logging(verbosity: Verbosity) -> bool {
    let default_filter = format!("sidenav={}", verbosity.to_level_filter());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    match tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Keeping existing subscriber: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 3), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
    }

    #[test]
    fn verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), LevelFilter::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), LevelFilter::WARN);
        assert_eq!(Verbosity::Verbose.to_level_filter(), LevelFilter::INFO);
        assert_eq!(Verbosity::Debug.to_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn init_logging_twice() {
        init_logging(Verbosity::Debug);
        assert!(!init_logging(Verbosity::Quiet));
        log::debug!("logging initialised");
    }
}
