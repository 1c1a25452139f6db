use serde::Serialize;
use veritas_validator::foundation::{Validate, ValidationError};
use veritas_validator::password::{PasswordPolicy, ResolvedPolicy};

use super::{Context, Outcome};
use crate::cli::PasswordArgs;

#[derive(Serialize)]
struct PasswordReport {
    valid: bool,
    policy: ResolvedPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

pub fn run(ctx: &Context, args: &PasswordArgs) -> anyhow::Result<Outcome> {
    let config = ctx.config.password.merge(args.overrides());
    let policy = PasswordPolicy::from(config);
    tracing::debug!(?config, "evaluating password policy");

    let error = policy.validate(&args.value).err();
    let human = match &error {
        None => "valid".to_owned(),
        Some(error) => format!("invalid: {error}"),
    };
    let report = PasswordReport {
        valid: error.is_none(),
        policy: config.resolve(),
        error,
    };

    ctx.emit(&report, human)?;
    Ok(Outcome::from_valid(report.valid))
}
