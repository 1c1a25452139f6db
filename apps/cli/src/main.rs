//! `veritas` command-line front end.
//!
//! Exit codes: `0` valid, `1` invalid, `2` usage or configuration error.

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::{Context, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = config::load(cli.config.as_deref())?;

    let filter = logging::resolve_filter(cli.log_level.as_deref(), config.log.level.as_deref());
    logging::init(&filter, cli.log_format.unwrap_or(config.log.format))?;
    tracing::debug!(
        explicit = ?cli.config,
        user = ?config::user_config_path(),
        "configuration loaded"
    );

    let ctx = Context {
        config,
        json: cli.json,
    };
    commands::run(cli.command, &ctx)
}
