//! Subcommand implementations.
//!
//! Each command prints its own output and reports whether the value it
//! looked at was acceptable; `main` turns that into the exit code.

mod check;
mod date;
mod password;
mod rules;

use std::process::ExitCode;

use serde::Serialize;

use crate::cli::Command;
use crate::config::Config;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Value accepted, or an informational command succeeded.
    Valid,
    /// Value rejected.
    Invalid,
}

impl Outcome {
    pub const fn from_valid(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Valid => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(1),
        }
    }
}

/// Shared state for every command.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub json: bool,
}

impl Context {
    /// Prints `report` as pretty JSON, or `human` otherwise.
    fn emit<T: Serialize>(&self, report: &T, human: impl std::fmt::Display) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            println!("{human}");
        }
        Ok(())
    }
}

pub fn run(command: Command, ctx: &Context) -> anyhow::Result<Outcome> {
    match command {
        Command::Rules => rules::run(ctx),
        Command::Check { rule, value } => check::run(ctx, rule, &value),
        Command::Password(args) => password::run(ctx, &args),
        Command::Date { query } => date::run(ctx, query),
    }
}
