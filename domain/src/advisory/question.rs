//! Advisory session input and its structural validation

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const MAX_QUESTIONS: usize = 10;
pub const MAX_SCOPES: usize = 3;
pub const MAX_AGENTS: usize = 3;
pub const MIN_QUESTION_CHARS: usize = 10;
pub const MAX_QUESTION_CHARS: usize = 2000;

/// One question posed to a set of advisory agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryQuestion {
    /// Topic scopes (1–3), e.g. "sales", "finance"
    pub scopes: Vec<String>,
    /// Question text (10–2000 characters)
    pub question: String,
    /// Named agents to consult (at most 3); empty means "use defaults"
    #[serde(default)]
    pub agent_names: Vec<String>,
}

impl AdvisoryQuestion {
    pub fn new(scopes: &[&str], question: impl Into<String>) -> Self {
        Self {
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
            question: question.into(),
            agent_names: Vec::new(),
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent_names.push(agent.into());
        self
    }

    /// Agents to consult for this question, falling back to `defaults`
    pub fn resolve_agents(&self, defaults: &[String]) -> Vec<String> {
        if self.agent_names.is_empty() {
            defaults.to_vec()
        } else {
            self.agent_names.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.scopes.is_empty() || self.scopes.len() > MAX_SCOPES {
            return Err(ValidationError::ScopeCount);
        }
        if self.agent_names.len() > MAX_AGENTS {
            return Err(ValidationError::AgentCount);
        }
        let chars = self.question.chars().count();
        if !(MIN_QUESTION_CHARS..=MAX_QUESTION_CHARS).contains(&chars) {
            return Err(ValidationError::QuestionLength);
        }
        Ok(())
    }
}

/// Input of an advisory session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorySessionInput {
    pub questions: Vec<AdvisoryQuestion>,
    /// Identity of the requester (recorded for audit, never hashed)
    #[serde(default)]
    pub requested_by: String,
}

impl AdvisorySessionInput {
    pub fn new(requested_by: impl Into<String>) -> Self {
        Self {
            questions: Vec::new(),
            requested_by: requested_by.into(),
        }
    }

    pub fn with_question(mut self, question: AdvisoryQuestion) -> Self {
        self.questions.push(question);
        self
    }

    /// Validate the whole input structurally.
    ///
    /// Checks the question count first, then each question in order
    /// (scopes, agents, length). The first violation wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions.is_empty() || self.questions.len() > MAX_QUESTIONS {
            return Err(ValidationError::QuestionCount);
        }
        self.questions.iter().try_for_each(AdvisoryQuestion::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> AdvisoryQuestion {
        AdvisoryQuestion::new(&["sales"], text).with_agent("agent1")
    }

    fn input_with(count: usize) -> AdvisorySessionInput {
        (0..count).fold(AdvisorySessionInput::new("user-1"), |input, i| {
            input.with_question(question(&format!("Question number {i}?")))
        })
    }

    #[test]
    fn test_valid_input() {
        assert!(input_with(1).validate().is_ok());
        assert!(input_with(10).validate().is_ok());
    }

    #[test]
    fn test_question_count_bounds() {
        assert_eq!(input_with(0).validate(), Err(ValidationError::QuestionCount));
        assert_eq!(
            input_with(11).validate().unwrap_err().to_string(),
            "Must provide 1-10 questions"
        );
    }

    #[test]
    fn test_scope_bounds() {
        let none = AdvisoryQuestion::new(&[], "How to increase sales?");
        let four = AdvisoryQuestion::new(&["a", "b", "c", "d"], "How to increase sales?");
        for q in [none, four] {
            let input = AdvisorySessionInput::new("u").with_question(q);
            assert_eq!(input.validate(), Err(ValidationError::ScopeCount));
        }
    }

    #[test]
    fn test_agent_cap() {
        let q = question("How to increase sales?")
            .with_agent("agent2")
            .with_agent("agent3")
            .with_agent("agent4");
        let input = AdvisorySessionInput::new("u").with_question(q);
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "Max 3 agents per question"
        );
    }

    #[test]
    fn test_question_length_bounds() {
        let short = AdvisorySessionInput::new("u").with_question(question("Short"));
        assert_eq!(
            short.validate().unwrap_err().to_string(),
            "Question length 10-2000 chars"
        );

        let long = AdvisorySessionInput::new("u").with_question(question(&"x".repeat(2001)));
        assert_eq!(long.validate(), Err(ValidationError::QuestionLength));

        let exact = AdvisorySessionInput::new("u").with_question(question(&"x".repeat(2000)));
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 30 bytes
        let q = question("あいうえおかきくけこ");
        let input = AdvisorySessionInput::new("u").with_question(q);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_count_checked_before_questions() {
        let mut input = input_with(11);
        input.questions[0].question = "bad".to_string();
        assert_eq!(input.validate(), Err(ValidationError::QuestionCount));
    }

    #[test]
    fn test_resolve_agents_falls_back_to_defaults() {
        let defaults = vec!["generalist".to_string()];
        let q = AdvisoryQuestion::new(&["ops"], "How to reduce downtime?");
        assert_eq!(q.resolve_agents(&defaults), defaults);
        let q = q.with_agent("sre");
        assert_eq!(q.resolve_agents(&defaults), vec!["sre".to_string()]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"questions":[{"scopes":["sales"],"question":"How to increase sales?","agentNames":["agent1"]}],"requestedBy":"u"}"#;
        let input: AdvisorySessionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.questions[0].agent_names, vec!["agent1"]);
        assert_eq!(input.requested_by, "u");
    }
}
