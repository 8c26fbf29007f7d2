//! greeter - Command-line template
//!
//! Parses a name and an optional age, then prints a greeting and an age line.
//!
//! Modules:
//! - `args`: command line into [`InvocationArgs`], or a usage error
//! - `printer`: the two output lines
//! - `prompt`: a single yes/no question on stdin/stdout

pub mod args;
pub mod printer;
pub mod prompt;

pub use args::{Invocation, InvocationArgs, UsageError};
pub use printer::Printer;
