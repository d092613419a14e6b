//! Deterministic, offline advisory agent.
//!
//! Turns the question itself into a recommendation ("How to increase
//! sales?" becomes "Increase sales") and adds one review item per scope.
//! A contrarian profile flips the leading verb through the antonym table,
//! which lets a local session exercise conflict detection without any
//! model behind it.

use async_trait::async_trait;
use std::collections::HashMap;
use steward_application::{AdvisoryAgent, AgentError, AgentQuery};
use steward_domain::ANTONYM_VERBS;
use steward_domain::AgentAnswer;
use steward_domain::core::string::collapse_whitespace;
use tracing::debug;

const QUESTION_PREFIXES: &[&str] = &[
    "how do we ",
    "how can we ",
    "how should we ",
    "how could we ",
    "how to ",
    "should we ",
    "can we ",
    "what if we ",
    "why not ",
];

const FALLBACK_RECOMMENDATION: &str = "Gather more information";

/// How an agent leans relative to the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Recommends what the question proposes
    #[default]
    Affirm,
    /// Recommends the opposite verb when one is known
    Contrarian,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisorProfile {
    pub stance: Stance,
    pub confidence: f64,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            stance: Stance::Affirm,
            confidence: 0.6,
        }
    }
}

pub struct HeuristicAdvisor {
    profiles: HashMap<String, AdvisorProfile>,
    /// Profile for agents without an explicit one; `None` rejects them
    fallback: Option<AdvisorProfile>,
}

impl Default for HeuristicAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicAdvisor {
    /// Advisor that answers for any agent name with the default profile
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            fallback: Some(AdvisorProfile::default()),
        }
    }

    /// Advisor that only answers for agents registered with [`with_profile`](Self::with_profile)
    pub fn strict() -> Self {
        Self {
            profiles: HashMap::new(),
            fallback: None,
        }
    }

    pub fn with_profile(mut self, agent: impl Into<String>, profile: AdvisorProfile) -> Self {
        self.profiles.insert(agent.into(), profile);
        self
    }

    fn profile(&self, agent: &str) -> Option<AdvisorProfile> {
        self.profiles.get(agent).copied().or(self.fallback)
    }
}

#[async_trait]
impl AdvisoryAgent for HeuristicAdvisor {
    async fn consult(&self, query: &AgentQuery) -> Result<AgentAnswer, AgentError> {
        let profile = self
            .profile(&query.agent)
            .ok_or_else(|| AgentError::UnknownAgent(query.agent.clone()))?;

        let mut primary = recommendation_from_question(&query.question);
        if profile.stance == Stance::Contrarian {
            primary = flip_leading_verb(&primary);
        }

        let mut answer = AgentAnswer::new(query.agent.clone(), profile.confidence)
            .with_recommendation(primary);
        answer.sources.push(format!("heuristic:{}", query.agent));
        for scope in &query.scopes {
            answer.recommendations.push(format!("Review {scope} metrics"));
            answer.sources.push(format!("scope:{scope}"));
        }

        debug!(
            agent = %query.agent,
            question = query.question_index,
            recommendations = answer.recommendations.len(),
            "Heuristic advice produced"
        );
        Ok(answer)
    }
}

/// "How should we increase sales?" → "Increase sales"
pub fn recommendation_from_question(question: &str) -> String {
    let collapsed = collapse_whitespace(question);
    let mut text = collapsed.trim().trim_end_matches(['?', '.', '!']).trim_end();

    if let Some(rest) = QUESTION_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(text, prefix))
    {
        text = rest.trim_start();
    }

    if text.is_empty() {
        return FALLBACK_RECOMMENDATION.to_string();
    }
    capitalize(text)
}

fn flip_leading_verb(recommendation: &str) -> String {
    for (positive, negative) in ANTONYM_VERBS {
        for (from, to) in [(positive, negative), (negative, positive)] {
            if let Some(rest) = strip_prefix_ignore_case(recommendation, &format!("{from} ")) {
                return capitalize(&format!("{to} {rest}"));
            }
        }
    }
    recommendation.to_string()
}

/// ASCII case-insensitive `strip_prefix`
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
