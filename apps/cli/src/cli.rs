//! Clap CLI definition: root struct, subcommands, and shared argument types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use veritas_validator::password::PasswordPolicyConfig;
use veritas_validator::registry::RuleKind;

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "veritas", version, about = "Validate data formats, passwords and dates")]
pub struct Cli {
    /// Extra TOML config file, layered over the user config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive (overrides VERITAS_LOG and RUST_LOG).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum, value_name = "FMT")]
    pub log_format: Option<LogFormat>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `veritas` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every registered rule.
    Rules,

    /// Run one rule against a value.
    Check {
        /// Rule name, e.g. `credit-card` (see `veritas rules`).
        #[arg(value_name = "RULE")]
        rule: RuleKind,
        /// Value to validate.
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Evaluate a password against the configured policy.
    Password(PasswordArgs),

    /// Calendar queries.
    Date {
        #[command(subcommand)]
        query: DateQuery,
    },
}

#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password to evaluate.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Minimum length.
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Length from which upper, lower and special characters are waived.
    #[arg(long, value_name = "N")]
    pub bypass_length: Option<usize>,

    /// Do not require an uppercase letter.
    #[arg(long)]
    pub no_upper: bool,

    /// Do not require a lowercase letter.
    #[arg(long)]
    pub no_lower: bool,

    /// Do not require a special character.
    #[arg(long)]
    pub no_special: bool,
}

impl PasswordArgs {
    /// Policy fields set on the command line; everything else stays unset.
    pub fn overrides(&self) -> PasswordPolicyConfig {
        let mut config = PasswordPolicyConfig::new();
        if let Some(length) = self.min_length {
            config = config.with_minimum_length(length);
        }
        if let Some(length) = self.bypass_length {
            config = config.with_special_char_bypass_length(length);
        }
        if self.no_upper {
            config = config.with_require_upper(false);
        }
        if self.no_lower {
            config = config.with_require_lower(false);
        }
        if self.no_special {
            config = config.with_require_special(false);
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum DateQuery {
    /// Whether YEAR is a leap year.
    LeapYear {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Number of days in MONTH of YEAR.
    DaysInMonth {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        month: u32,
    },

    /// Whether DATE is the first day of its month.
    FirstDay {
        #[arg(value_name = "YYYY-MM-DD")]
        date: NaiveDate,
    },

    /// Whether DATE is the last day of its month.
    LastDay {
        #[arg(value_name = "YYYY-MM-DD")]
        date: NaiveDate,
    },

    /// Day of the week of DATE.
    Weekday {
        #[arg(value_name = "YYYY-MM-DD")]
        date: NaiveDate,
    },
}
