use serde::Serialize;
use veritas_validator::foundation::ValidationError;
use veritas_validator::registry::RuleKind;

use super::{Context, Outcome};

#[derive(Serialize)]
struct CheckReport {
    rule: RuleKind,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

pub fn run(ctx: &Context, rule: RuleKind, value: &str) -> anyhow::Result<Outcome> {
    let error = rule.validate(value).err();
    tracing::info!(rule = rule.name(), valid = error.is_none(), "checked value");

    let human = match &error {
        None => "valid".to_owned(),
        Some(error) => format!("invalid: {error}"),
    };
    let report = CheckReport {
        rule,
        valid: error.is_none(),
        error,
    };

    ctx.emit(&report, human)?;
    Ok(Outcome::from_valid(report.valid))
}
