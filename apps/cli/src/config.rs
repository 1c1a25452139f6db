//! Layered configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `veritas/veritas.toml` under the platform config directory
//! 3. the file passed with `--config`
//! 4. `VERITAS_`-prefixed environment variables, nested with `__`
//!    (`VERITAS_PASSWORD__MINIMUM_LENGTH=12`)
//!
//! Command-line flags are layered on top by the commands themselves.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use veritas_validator::password::PasswordPolicyConfig;

use crate::logging::LogFormat;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "VERITAS_";

/// Config tables the environment may set, as `VERITAS_<TABLE>__<KEY>`.
const ENV_TABLES: &[&str] = &["password", "log"];

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `[password]` policy table.
    pub password: PasswordPolicyConfig,
    /// `[log]` table.
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `"info"` or `"veritas_validator=debug"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub format: LogFormat,
}

/// `<config dir>/veritas/veritas.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("veritas").join("veritas.toml"))
}

/// Builds the figment for the given explicit config file.
pub fn figment(explicit: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = user_config_path() {
        figment = figment.merge(Toml::file(path));
    }
    if let Some(path) = explicit {
        figment = figment.merge(Toml::file(path));
    }

    // Only nested keys are config. `VERITAS_LOG` is a filter directive and
    // other `VERITAS_*` variables belong to someone else.
    figment.merge(
        Env::prefixed(ENV_PREFIX)
            .filter(|key| {
                let key = key.as_str().to_ascii_lowercase();
                ENV_TABLES
                    .iter()
                    .any(|table| key.starts_with(&format!("{table}__")))
            })
            .split("__"),
    )
}

/// Loads the layered configuration.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        anyhow::ensure!(
            path.is_file(),
            "config file `{}` does not exist",
            path.display()
        );
    }

    figment(explicit)
        .extract()
        .context("failed to load configuration")
}
