use serde::Serialize;
use veritas_validator::foundation::ValidatorMetadata;
use veritas_validator::registry::RuleKind;

use super::{Context, Outcome};

#[derive(Serialize)]
struct RuleEntry {
    rule: RuleKind,
    #[serde(flatten)]
    metadata: ValidatorMetadata,
}

pub fn run(ctx: &Context) -> anyhow::Result<Outcome> {
    let entries: Vec<RuleEntry> = RuleKind::ALL
        .into_iter()
        .map(|rule| RuleEntry {
            rule,
            metadata: rule.metadata(),
        })
        .collect();

    let human = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<18} {}",
                entry.rule.name(),
                entry.metadata.description.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ctx.emit(&entries, human)?;
    Ok(Outcome::Valid)
}
