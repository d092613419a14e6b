use crate::args::AdviseArgs;
use crate::progress::ProgressReporter;
use crate::wiring::Components;
use anyhow::{Result, bail};
use serde_json::{Value, json};
use steward_domain::core::string::push_unique;
use steward_domain::{AdvisoryQuestion, AdvisorySessionInput};
use steward_infrastructure::{AdvisorProfile, HeuristicAdvisor, Stance};
use tokio_util::sync::CancellationToken;

pub async fn run(args: AdviseArgs, components: &Components, quiet: bool) -> Result<Value> {
    let input = session_input(&args)?;

    let mut advisor = HeuristicAdvisor::new();
    for name in &args.contrarians {
        advisor = advisor.with_profile(
            name.clone(),
            AdvisorProfile {
                stance: Stance::Contrarian,
                ..Default::default()
            },
        );
    }

    // Ctrl-C aborts the session; nothing is retained
    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let use_case = components
        .advisory_session(advisor)
        .with_cancellation(token);
    let output = if quiet {
        use_case.execute(input).await?
    } else {
        use_case
            .execute_with_progress(input, &ProgressReporter::new())
            .await?
    };
    let record = use_case.get_session(&output.session_id).await?;

    Ok(json!({
        "session": output,
        "record": record,
    }))
}

fn session_input(args: &AdviseArgs) -> Result<AdvisorySessionInput> {
    if let Some(path) = &args.input {
        return super::load_json(path);
    }
    let Some(question) = &args.question else {
        bail!("Either --input or --question is required");
    };

    let scopes: Vec<&str> = args.scopes.iter().map(String::as_str).collect();
    let mut agents = args.agents.clone();
    for name in &args.contrarians {
        push_unique(&mut agents, name);
    }

    let mut q = AdvisoryQuestion::new(&scopes, question.clone());
    for agent in agents {
        q = q.with_agent(agent);
    }
    Ok(AdvisorySessionInput::new(args.requested_by.clone()).with_question(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AdviseArgs {
        AdviseArgs {
            input: None,
            question: Some("How to increase sales?".to_string()),
            scopes: vec!["sales".to_string()],
            agents: vec!["growth".to_string()],
            contrarians: vec!["skeptic".to_string()],
            requested_by: "tester".to_string(),
        }
    }

    #[test]
    fn test_contrarians_are_consulted() {
        let input = session_input(&args()).unwrap();
        assert_eq!(input.questions[0].agent_names, vec!["growth", "skeptic"]);
    }

    #[tokio::test]
    async fn test_contrarian_produces_conflict() {
        let components = Components::from_config(Default::default()).unwrap();
        let result = run(args(), &components, true).await.unwrap();

        let conflicts = result["session"]["conflicts"].as_array().unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0]["topic"], "sales");
        assert!(result["record"].is_object());
    }

    #[test]
    fn test_question_required() {
        let mut args = args();
        args.question = None;
        assert!(session_input(&args).is_err());
    }
}
