//! Antonym-verb conflict detection
//!
//! A recommendation "touches" a topic when its normalized form starts with
//! one of the verbs below followed by a space; the remainder is the topic.
//! The match is a literal prefix: reordered or multi-word verb phrases are
//! not recognized, and fixtures depend on that.

use super::normalize::normalize_recommendation;
use super::session::{AgentRecommendation, Conflict};
use crate::core::string::push_unique;

/// Fixed, ordered table of opposing verbs (positive, negative)
pub const ANTONYM_VERBS: &[(&str, &str)] = &[
    ("increase", "decrease"),
    ("enable", "disable"),
    ("allow", "prevent"),
    ("expand", "reduce"),
    ("start", "stop"),
    ("add", "remove"),
    ("raise", "lower"),
];

#[derive(Default)]
struct TopicTally {
    topic: String,
    agents_for: Vec<String>,
    agents_against: Vec<String>,
}

impl TopicTally {
    fn distinct_agents(&self) -> usize {
        let mut all = self.agents_for.clone();
        for agent in &self.agents_against {
            push_unique(&mut all, agent);
        }
        all.len()
    }
}

fn topic_after_verb<'a>(normalized: &'a str, verb: &str) -> Option<&'a str> {
    let topic = normalized.strip_prefix(verb)?.strip_prefix(' ')?.trim();
    (!topic.is_empty()).then_some(topic)
}

/// Scan recommendations (in submission order) for opposing verbs on the
/// same topic.
///
/// A topic is flagged when both directions were recommended and more than
/// one distinct agent is involved; an agent contradicting itself alone is
/// not a conflict. Output order follows the verb table, then topic
/// first-appearance.
pub fn detect_conflicts(recommendations: &[AgentRecommendation], max_len: usize) -> Vec<Conflict> {
    let normalized: Vec<(String, &str)> = recommendations
        .iter()
        .map(|r| (normalize_recommendation(&r.text, max_len), r.agent.as_str()))
        .collect();

    let mut conflicts = Vec::new();

    for (positive, negative) in ANTONYM_VERBS {
        let mut tallies: Vec<TopicTally> = Vec::new();

        for (text, agent) in &normalized {
            let (topic, in_favor) = if let Some(topic) = topic_after_verb(text, positive) {
                (topic, true)
            } else if let Some(topic) = topic_after_verb(text, negative) {
                (topic, false)
            } else {
                continue;
            };

            let index = match tallies.iter().position(|t| t.topic == topic) {
                Some(index) => index,
                None => {
                    tallies.push(TopicTally {
                        topic: topic.to_string(),
                        ..Default::default()
                    });
                    tallies.len() - 1
                }
            };
            let tally = &mut tallies[index];
            if in_favor {
                push_unique(&mut tally.agents_for, agent);
            } else {
                push_unique(&mut tally.agents_against, agent);
            }
        }

        conflicts.extend(
            tallies
                .into_iter()
                .filter(|t| {
                    !t.agents_for.is_empty()
                        && !t.agents_against.is_empty()
                        && t.distinct_agents() > 1
                })
                .map(|t| Conflict {
                    topic: t.topic,
                    positive_verb: positive.to_string(),
                    negative_verb: negative.to_string(),
                    agents_for: t.agents_for,
                    agents_against: t.agents_against,
                }),
        );
    }

    conflicts
}
