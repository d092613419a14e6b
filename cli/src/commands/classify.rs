use crate::args::{ClassifyArgs, DecisionArgs};
use crate::wiring::Components;
use anyhow::{Result, bail};
use serde_json::{Value, json};
use steward_domain::{Classification, DecisionObject};

pub fn run(args: ClassifyArgs, components: &Components) -> Result<Value> {
    let classification = classify(&args, components)?;
    let audit = components
        .audit()
        .entries_for(classification.decision.id.as_str())?;

    Ok(json!({
        "classification": classification,
        "audit": audit,
    }))
}

/// Classify the decision named by the arguments.
///
/// The primary agent defaults to the proposer, and the agent list to the
/// primary alone.
pub fn classify(args: &ClassifyArgs, components: &Components) -> Result<Classification> {
    let decision = decision_from_args(&args.decision)?;
    let primary = args
        .primary
        .clone()
        .unwrap_or_else(|| decision.proposed_by.clone());
    let agents = if args.agents.is_empty() {
        vec![primary.clone()]
    } else {
        args.agents.clone()
    };

    Ok(components
        .decision_authority()
        .classify(decision, &primary, &agents))
}

fn decision_from_args(args: &DecisionArgs) -> Result<DecisionObject> {
    if let Some(path) = &args.decision_file {
        return super::load_json(path);
    }
    let Some(text) = &args.decision else {
        bail!("Either --decision or --decision-file is required");
    };

    let mut decision = DecisionObject::new(
        args.scope.clone(),
        text.clone(),
        args.proposed_by.clone(),
        args.risk,
    );
    if let Some(confidence) = args.confidence {
        decision = decision.with_confidence(confidence);
    }
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_domain::{DecisionStatus, RiskLevel};

    fn args(risk: RiskLevel, agents: &[&str]) -> ClassifyArgs {
        ClassifyArgs {
            decision: DecisionArgs {
                decision_file: None,
                scope: "pricing".to_string(),
                decision: Some("Raise list prices by 5%".to_string()),
                proposed_by: "pricer".to_string(),
                risk,
                confidence: None,
            },
            primary: None,
            agents: agents.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_classify_defaults_to_proposer() {
        let components = Components::from_config(Default::default()).unwrap();
        let result = run(args(RiskLevel::Medium, &[]), &components).unwrap();

        assert_eq!(result["classification"]["decision"]["status"], "PENDING_APPROVAL");
        assert_eq!(result["classification"]["errors"].as_array().unwrap().len(), 0);
        assert_eq!(result["audit"][0]["action"], "classify");
    }

    #[test]
    fn test_primary_missing_from_agents_is_an_error() {
        let components = Components::from_config(Default::default()).unwrap();
        let classification = classify(&args(RiskLevel::Low, &["analyst"]), &components).unwrap();

        assert_eq!(classification.decision.status, DecisionStatus::Proposed);
        assert!(!classification.is_valid());
    }
}
