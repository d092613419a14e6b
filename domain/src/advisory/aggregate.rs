//! Deterministic aggregation of an advisory session
//!
//! All functions here are pure and order-sensitive: callers must pass
//! answers in submission order.

use super::conflict::detect_conflicts;
use super::normalize::{DEFAULT_INSIGHT_MAX_LEN, normalize_recommendation};
use super::session::{
    AdvisorySessionOutput, AgentAnswer, AgentRecommendation, CrossInsight, Explainability,
    QuestionResult, SessionId,
};
use crate::core::string::push_unique;

pub const CONFIDENCE_FLOOR: f64 = 0.10;
pub const CONFIDENCE_CEILING: f64 = 0.90;
pub const CONFLICT_PENALTY: f64 = 0.05;
pub const CONSENSUS_BONUS: f64 = 0.05;
pub const DEFAULT_MAX_CROSS_INSIGHTS: usize = 10;

/// Caps applied while aggregating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationLimits {
    pub max_cross_insights: usize,
    pub insight_max_len: usize,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            max_cross_insights: DEFAULT_MAX_CROSS_INSIGHTS,
            insight_max_len: DEFAULT_INSIGHT_MAX_LEN,
        }
    }
}

/// Answers gathered for one question, before merging
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub scopes: Vec<String>,
    pub answers: Vec<AgentAnswer>,
}

/// Deduplicate recommendations by normalized key.
///
/// Keeps the first literal phrasing of each key and collects every agent
/// that produced it. Returns the capped insight list and whether dedup
/// removed at least one item.
pub fn cross_insights(
    recommendations: &[AgentRecommendation],
    limits: &AggregationLimits,
) -> (Vec<CrossInsight>, bool) {
    let mut keys: Vec<String> = Vec::new();
    let mut insights: Vec<CrossInsight> = Vec::new();
    let mut removed_duplicate = false;

    for rec in recommendations {
        let key = normalize_recommendation(&rec.text, limits.insight_max_len);
        if key.is_empty() {
            continue;
        }
        match keys.iter().position(|k| *k == key) {
            Some(index) => {
                removed_duplicate = true;
                push_unique(&mut insights[index].agents, &rec.agent);
            }
            None => {
                keys.push(key);
                insights.push(CrossInsight {
                    text: rec.text.trim().to_string(),
                    agents: vec![rec.agent.clone()],
                });
            }
        }
    }

    insights.truncate(limits.max_cross_insights);
    (insights, removed_duplicate)
}

/// Aggregate confidence of a session.
///
/// Mean of per-question confidences, minus a penalty per conflict, plus a
/// bonus when dedup found agreement, clamped to [0.10, 0.90].
pub fn aggregate_confidence(
    per_question: &[f64],
    conflict_count: usize,
    removed_duplicate: bool,
) -> f64 {
    let mean = if per_question.is_empty() {
        0.0
    } else {
        per_question.iter().sum::<f64>() / per_question.len() as f64
    };
    let mut confidence = mean - CONFLICT_PENALTY * conflict_count as f64;
    if removed_duplicate {
        confidence += CONSENSUS_BONUS;
    }
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

/// Merge every answered question into the session output.
pub fn aggregate_session(
    session_id: SessionId,
    requested_by: &str,
    answered: &[AnsweredQuestion],
    limits: &AggregationLimits,
    created_at: u64,
) -> AdvisorySessionOutput {
    let per_question: Vec<QuestionResult> = answered
        .iter()
        .enumerate()
        .map(|(index, q)| QuestionResult::from_answers(index, &q.scopes, &q.answers))
        .collect();

    let all_recommendations: Vec<AgentRecommendation> = per_question
        .iter()
        .flat_map(|q| q.recommendations.iter().cloned())
        .collect();

    let (insights, removed_duplicate) = cross_insights(&all_recommendations, limits);
    let conflicts = detect_conflicts(&all_recommendations, limits.insight_max_len);
    let confidences: Vec<f64> = per_question.iter().map(|q| q.confidence).collect();
    let confidence = aggregate_confidence(&confidences, conflicts.len(), removed_duplicate);

    let mut explainability = Explainability::default();
    for question in answered {
        for scope in &question.scopes {
            push_unique(&mut explainability.scopes, scope);
        }
        for answer in &question.answers {
            push_unique(&mut explainability.agents, &answer.agent);
            for source in &answer.sources {
                push_unique(&mut explainability.sources, source);
            }
        }
    }

    AdvisorySessionOutput {
        session_id,
        requested_by: requested_by.to_string(),
        per_question,
        cross_insights: insights,
        conflicts,
        confidence,
        explainability,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(agent: &str, text: &str) -> AgentRecommendation {
        AgentRecommendation {
            agent: agent.to_string(),
            text: text.to_string(),
        }
    }

    fn answered(scope: &str, answers: Vec<AgentAnswer>) -> AnsweredQuestion {
        AnsweredQuestion {
            scopes: vec![scope.to_string()],
            answers,
        }
    }

    #[test]
    fn test_cross_insights_dedup_keeps_first_phrasing() {
        let (insights, removed) = cross_insights(
            &[
                rec("a", "Increase sales."),
                rec("b", "increase SALES"),
                rec("b", "Cut costs"),
            ],
            &AggregationLimits::default(),
        );
        assert!(removed);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].text, "Increase sales.");
        assert_eq!(insights[0].agents, vec!["a", "b"]);
    }

    #[test]
    fn test_cross_insights_cap() {
        let recs: Vec<_> = (0..15).map(|i| rec("a", &format!("Idea {i}"))).collect();
        let (insights, removed) = cross_insights(&recs, &AggregationLimits::default());
        assert_eq!(insights.len(), 10);
        assert!(!removed);
        assert_eq!(insights[9].text, "Idea 9");
    }

    #[test]
    fn test_confidence_mean() {
        let c = aggregate_confidence(&[0.6, 0.8], 0, false);
        assert!((c - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_adjustments() {
        let penalized = aggregate_confidence(&[0.7], 2, false);
        assert!((penalized - 0.6).abs() < 1e-9);
        let boosted = aggregate_confidence(&[0.7], 0, true);
        assert!((boosted - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(aggregate_confidence(&[1.0], 0, true), CONFIDENCE_CEILING);
        assert_eq!(aggregate_confidence(&[0.1], 5, false), CONFIDENCE_FLOOR);
        assert_eq!(aggregate_confidence(&[], 0, false), CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_aggregate_session_identical_recommendations() {
        // Same normalized recommendation from two agents on two questions
        let answered = vec![
            answered(
                "sales",
                vec![AgentAnswer::new("agent1", 0.7).with_recommendation("Improve onboarding.")],
            ),
            answered(
                "support",
                vec![AgentAnswer::new("agent2", 0.5).with_recommendation("improve onboarding")],
            ),
        ];
        let output = aggregate_session(
            SessionId::new("s-1"),
            "user",
            &answered,
            &AggregationLimits::default(),
            1,
        );
        assert_eq!(output.per_question.len(), 2);
        assert_eq!(output.cross_insights.len(), 1);
        assert_eq!(output.cross_insights[0].agents, vec!["agent1", "agent2"]);
        assert!((output.confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_session_conflict_penalty_and_explainability() {
        let answered = vec![
            answered(
                "growth",
                vec![
                    AgentAnswer::new("a", 0.8)
                        .with_recommendation("Increase ad spend")
                        .with_source("q3-report"),
                ],
            ),
            answered(
                "finance",
                vec![
                    AgentAnswer::new("b", 0.8)
                        .with_recommendation("Decrease ad spend")
                        .with_source("q3-report")
                        .with_source("budget"),
                ],
            ),
        ];
        let output = aggregate_session(
            SessionId::new("s-2"),
            "user",
            &answered,
            &AggregationLimits::default(),
            1,
        );
        assert_eq!(output.conflicts.len(), 1);
        assert!((output.confidence - 0.75).abs() < 1e-9);
        assert_eq!(output.explainability.scopes, vec!["growth", "finance"]);
        assert_eq!(output.explainability.agents, vec!["a", "b"]);
        assert_eq!(output.explainability.sources, vec!["q3-report", "budget"]);
        assert_eq!(output.summary(), "2 question(s), 2 insight(s), 1 conflict(s)");
    }
}
