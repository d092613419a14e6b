use super::classify::classify;
use crate::args::IntentArgs;
use crate::wiring::Components;
use anyhow::Result;
use serde_json::{Value, json};
use tracing::warn;

pub async fn run(args: IntentArgs, components: &Components) -> Result<Value> {
    let classification = classify(&args.classify, components)?;
    if !classification.is_valid() {
        warn!(errors = ?classification.errors, "Decision has structural errors");
    }

    let governor = components.intent_governor();
    let created = governor
        .create_from_decision(&classification.decision, &args.requested_by, &args.missing)
        .await?;

    let decided = match (&args.approve, &args.reject) {
        (Some(user), _) => governor.approve(&created.id, user, &args.reason).await?,
        (None, Some(user)) => governor.reject(&created.id, user, &args.reason).await?,
        (None, None) => None,
    };
    let intent = decided.unwrap_or(created);

    let handoff = governor.get_handoff_payload(&intent.id).await?;
    let audit = components.audit().entries_for(intent.id.as_str())?;

    Ok(json!({
        "classification": classification,
        "intent": intent,
        "handoff": handoff,
        "audit": audit,
    }))
}
