//! confirm - Ask a yes/no question
//!
//! Exits 0 when the answer is `y`, 1 otherwise, so it chains in shell scripts:
//!
//!   confirm "Deploy to production?" && ./deploy.sh

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use greeter::prompt::{self, DEFAULT_QUESTION};
use greeter_core::{logging, LogConfig};

/// confirm - Ask a yes/no question
#[derive(Parser)]
#[command(name = "confirm")]
#[command(version)]
#[command(about = "Ask a yes/no question on the terminal; exit 0 on yes")]
#[command(after_help = r#"ANSWERS:
    y / Y       yes (exit 0)
    anything    no (exit 1), including an empty line

EXAMPLES:
    confirm                              # Are you sure? [y/N]
    confirm "Overwrite config?" && cp new.toml config.toml
"#)]
struct Cli {
    /// Question to ask
    #[arg(default_value = DEFAULT_QUESTION)]
    question: String,
}

fn main() -> Result<ExitCode> {
    logging::init(&LogConfig::from_env());

    let cli = Cli::parse();

    let confirmed = prompt::prompt_user_yes_no(&cli.question).context("Failed to read answer")?;

    Ok(if confirmed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
