//! Tracing subscriber setup.
//!
//! Events go to stderr so stdout stays reserved for command output.

use std::io::IsTerminal;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when nothing else sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Environment variable checked before `RUST_LOG`.
pub const LEVEL_ENV: &str = "VERITAS_LOG";

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line output
    #[default]
    Compact,
    /// Human-readable multi-line output
    Pretty,
    /// Structured JSON output
    Json,
}

/// Picks the filter directive: `--log-level`, then `VERITAS_LOG`, then
/// `RUST_LOG`, then the config file, then [`DEFAULT_LEVEL`].
pub fn resolve_filter(flag: Option<&str>, configured: Option<&str>) -> String {
    flag.map(str::to_owned)
        .or_else(|| non_empty_env(LEVEL_ENV))
        .or_else(|| non_empty_env(EnvFilter::DEFAULT_ENV))
        .or_else(|| configured.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Installs the global subscriber.
pub fn init(filter: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;
    let ansi = std::io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr).with_ansi(ansi))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_current_span(false),
            )
            .try_init(),
    };

    installed.context("failed to install the tracing subscriber")
}
