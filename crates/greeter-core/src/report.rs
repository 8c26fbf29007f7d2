//! Error reporting and termination
//!
//! Fatal application errors are printed as `Error: <message>` followed by a
//! blank line on stderr, and the process exits with status 1.

use std::io::{self, Write};
use thiserror::Error;

/// Exit status for application-level failures
pub const APPLICATION_EXIT_CODE: i32 = 1;

/// An application-level failure, as opposed to a usage error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApplicationError {
    pub message: String,
}

impl ApplicationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Report this error and exit
    pub fn terminate(&self) -> ! {
        terminate_execution(&self.message)
    }
}

/// Write an error report to `writer`
pub fn write_error<W: Write>(mut writer: W, message: &str) -> io::Result<()> {
    write!(writer, "Error: {}\n\n", message)?;
    writer.flush()
}

/// Write an error report to stderr
pub fn print_error(message: &str) {
    // Nothing left to report to if stderr itself is gone
    let _ = write_error(io::stderr().lock(), message);
}

/// Report `message` on stderr and exit with status 1
pub fn terminate_execution(message: &str) -> ! {
    tracing::debug!(exit_code = APPLICATION_EXIT_CODE, "terminating: {}", message);
    print_error(message);
    std::process::exit(APPLICATION_EXIT_CODE)
}
