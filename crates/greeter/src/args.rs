//! Command-line arguments
//!
//! Parsing never exits the process. [`parse_from`] returns what the caller
//! should do, and the caller decides what gets printed and the exit status.

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::num::ParseIntError;
use thiserror::Error;

/// Program version reported by `-v/--version`
pub const VERSION: &str = "1.0.0";

/// Age used when `--age` is not given
pub const DEFAULT_AGE: i64 = 42;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version = VERSION)]
#[command(about = "Basic command-line template. Prints a greeting message.")]
#[command(disable_version_flag = true)]
struct Cli {
    /// show program version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// specify a name for the greeting message
    #[arg(value_name = "name", value_parser = NonEmptyStringValueParser::new())]
    name: String,

    /// specify a number for age (default: 42)
    #[arg(
        short,
        long,
        value_name = "age",
        value_parser = parse_age,
        default_value_t = DEFAULT_AGE,
        hide_default_value = true,
        allow_negative_numbers = true
    )]
    age: i64,
}

/// Base-10 integer, surrounding whitespace ignored
fn parse_age(value: &str) -> Result<i64, ParseIntError> {
    value.trim().parse()
}

/// Validated inputs of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub name: String,
    pub age: i64,
}

impl From<Cli> for InvocationArgs {
    fn from(cli: Cli) -> Self {
        Self {
            name: cli.name,
            age: cli.age,
        }
    }
}

/// What a successful parse asks the program to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Greet with the parsed arguments
    Run(InvocationArgs),
    /// Print the rendered version line to stdout and exit 0
    Version(String),
    /// Print the rendered help to stdout and exit 0
    Help(String),
}

/// Missing or malformed command-line input
#[derive(Error, Debug)]
#[error(transparent)]
pub struct UsageError(#[from] clap::Error);

impl UsageError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    /// Exit status for this error (2, the conventional usage-error code)
    pub fn exit_code(&self) -> i32 {
        self.0.exit_code()
    }
}

/// Parse a full argument list, program name first.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli.into())),
        Err(err) => match err.kind() {
            ErrorKind::DisplayVersion => Ok(Invocation::Version(err.render().to_string())),
            ErrorKind::DisplayHelp => Ok(Invocation::Help(err.render().to_string())),
            _ => Err(UsageError(err)),
        },
    }
}
