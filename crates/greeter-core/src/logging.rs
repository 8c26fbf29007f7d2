//! Logging setup
//!
//! Verbosity is decided once by the caller and handed over as a [`LogConfig`];
//! nothing below `main` inspects the environment on its own.

use crate::env::{self, is_truthy, DEBUG_VAR};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration for one process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Debug mode: log everything, regardless of RUST_LOG
    pub debug: bool,
}

impl LogConfig {
    /// Filter used in debug mode
    pub const DEBUG_DIRECTIVE: &'static str = "trace";

    /// Filter used when debug mode is off and RUST_LOG is unset or invalid
    pub const DEFAULT_DIRECTIVE: &'static str = "warn";

    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Build the configuration from the `DEBUG` environment variable
    pub fn from_env() -> Self {
        Self::new(env::flag(DEBUG_VAR))
    }

    /// Build the configuration from a raw `DEBUG` value
    pub fn from_debug_value(value: Option<&str>) -> Self {
        Self::new(value.is_some_and(is_truthy))
    }

    /// Filter for the subscriber
    pub fn filter(&self) -> EnvFilter {
        if self.debug {
            return EnvFilter::new(Self::DEBUG_DIRECTIVE);
        }

        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Self::DEFAULT_DIRECTIVE))
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr; stdout belongs to the program output. Colours only
/// when stderr is a terminal. A second call is
/// a no-op.
pub fn init(config: &LogConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .is_ok();

    if installed && config.debug {
        tracing::debug!("Debug mode enabled.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_from_debug_value() {
        assert!(LogConfig::from_debug_value(Some("true")).debug);
        assert!(LogConfig::from_debug_value(Some("Yes")).debug);
        assert!(LogConfig::from_debug_value(Some("1")).debug);
        assert!(!LogConfig::from_debug_value(Some("0")).debug);
        assert!(!LogConfig::from_debug_value(Some("")).debug);
        assert!(!LogConfig::from_debug_value(None).debug);
    }

    #[test]
    fn test_default_is_quiet() {
        assert_eq!(LogConfig::default(), LogConfig::new(false));
    }

    #[test]
    fn test_debug_filter_is_most_verbose() {
        let filter = LogConfig::new(true).filter();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_init_twice() {
        init(&LogConfig::new(true));
        init(&LogConfig::new(false));
    }
}
