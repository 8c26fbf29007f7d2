//! greeter - Command-line template
//!
//! Usage:
//!   greeter <name> [-a|--age <age>]    Print a greeting and an age line
//!   greeter -v|--version               Print the version and exit
//!
//! Environment:
//!   DEBUG=1|true|yes                   Verbose logging on stderr
//!   RUST_LOG                           Log filter when DEBUG is off

use anyhow::{Context, Result};
use greeter::args::{self, Invocation, InvocationArgs};
use greeter::Printer;
use greeter_core::{logging, terminate_execution, LogConfig};

fn main() {
    // Debug mode has to be on before the arguments are looked at
    logging::init(&LogConfig::from_env());

    let invocation = match args::parse_from(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "argument parsing failed");
            eprint!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    let result = match invocation {
        Invocation::Version(text) => Printer::stdout()
            .print_text(&text)
            .context("Failed to write version"),
        Invocation::Help(text) => Printer::stdout()
            .print_text(&text)
            .context("Failed to write help"),
        Invocation::Run(args) => run(&args),
    };

    if let Err(err) = result {
        terminate_execution(&format!("{:#}", err));
    }
}

fn run(args: &InvocationArgs) -> Result<()> {
    tracing::debug!(name = %args.name, age = args.age, "parsed arguments");

    let mut printer = Printer::stdout();
    printer
        .print_name(&args.name)
        .context("Failed to write greeting")?;
    printer.print_age(args.age).context("Failed to write age")?;

    Ok(())
}
