//! Advisory session results

use crate::core::time::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier of an advisory session
    SessionId
);

/// Answer of one advisory agent to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAnswer {
    /// Agent name
    pub agent: String,
    /// Natural-language recommendations, in the agent's order
    pub recommendations: Vec<String>,
    /// Self-reported confidence (clamped to 0.0–1.0 when aggregated)
    pub confidence: f64,
    /// Sources or signals the agent relied on (explainability)
    #[serde(default)]
    pub sources: Vec<String>,
}

impl AgentAnswer {
    pub fn new(agent: impl Into<String>, confidence: f64) -> Self {
        Self {
            agent: agent.into(),
            recommendations: Vec::new(),
            confidence,
            sources: Vec::new(),
        }
    }

    pub fn with_recommendation(mut self, text: impl Into<String>) -> Self {
        self.recommendations.push(text.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }
}

/// A recommendation attributed to the agent that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecommendation {
    pub agent: String,
    pub text: String,
}

/// Merged result for a single question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    /// Position of the question in the input (0-based)
    pub index: usize,
    pub scopes: Vec<String>,
    /// Agents consulted, in consultation order
    pub agents: Vec<String>,
    /// All recommendations, in agent then recommendation order
    pub recommendations: Vec<AgentRecommendation>,
    /// Mean of the agents' clamped confidences
    pub confidence: f64,
    /// Human-readable one-line summary of the recommendations
    pub summary: String,
}

impl QuestionResult {
    /// Build a question result from the answers collected for it.
    pub fn from_answers(index: usize, scopes: &[String], answers: &[AgentAnswer]) -> Self {
        let recommendations: Vec<AgentRecommendation> = answers
            .iter()
            .flat_map(|answer| {
                answer.recommendations.iter().map(|text| AgentRecommendation {
                    agent: answer.agent.clone(),
                    text: text.clone(),
                })
            })
            .collect();

        let confidence = if answers.is_empty() {
            0.0
        } else {
            answers
                .iter()
                .map(|a| a.confidence.clamp(0.0, 1.0))
                .sum::<f64>()
                / answers.len() as f64
        };

        let summary = recommendations
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            index,
            scopes: scopes.to_vec(),
            agents: answers.iter().map(|a| a.agent.clone()).collect(),
            recommendations,
            confidence,
            summary,
        }
    }
}

/// A recommendation shared across the session after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossInsight {
    /// First literal phrasing seen for this normalized recommendation
    pub text: String,
    /// Every agent that produced it, first-seen order
    pub agents: Vec<String>,
}

/// Opposing recommendations on the same topic from different agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub topic: String,
    pub positive_verb: String,
    pub negative_verb: String,
    pub agents_for: Vec<String>,
    pub agents_against: Vec<String>,
}

/// Union of everything the session drew on, first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explainability {
    pub scopes: Vec<String>,
    pub agents: Vec<String>,
    pub sources: Vec<String>,
}

/// Output of an advisory session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorySessionOutput {
    pub session_id: SessionId,
    pub requested_by: String,
    pub per_question: Vec<QuestionResult>,
    pub cross_insights: Vec<CrossInsight>,
    pub conflicts: Vec<Conflict>,
    /// Aggregate confidence in [0.10, 0.90]
    pub confidence: f64,
    pub explainability: Explainability,
    /// Creation time (milliseconds since epoch)
    pub created_at: u64,
}

impl AdvisorySessionOutput {
    /// Count-only summary; never includes question or answer text
    pub fn summary(&self) -> String {
        format!(
            "{} question(s), {} insight(s), {} conflict(s)",
            self.per_question.len(),
            self.cross_insights.len(),
            self.conflicts.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_result_from_answers() {
        let answers = vec![
            AgentAnswer::new("a", 0.8).with_recommendation("Increase sales"),
            AgentAnswer::new("b", 0.4)
                .with_recommendation("Hire staff")
                .with_recommendation("Cut prices"),
        ];
        let result = QuestionResult::from_answers(0, &["sales".to_string()], &answers);

        assert_eq!(result.agents, vec!["a", "b"]);
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[2].agent, "b");
        assert!((result.confidence - 0.6).abs() < 1e-9);
        assert_eq!(result.summary, "Increase sales; Hire staff; Cut prices");
    }

    #[test]
    fn test_question_result_clamps_confidence() {
        let answers = vec![AgentAnswer::new("a", 3.0), AgentAnswer::new("b", -1.0)];
        let result = QuestionResult::from_answers(0, &[], &answers);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_question_result_without_answers() {
        let result = QuestionResult::from_answers(2, &[], &[]);
        assert_eq!(result.confidence, 0.0);
        assert!(result.summary.is_empty());
    }
}
