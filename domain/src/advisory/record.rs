//! Persisted advisory session record
//!
//! The record is the only part of a session that outlives the call. It
//! must never contain raw question text: questions are reduced to a
//! SHA-256 digest and a character count.

use super::question::AdvisorySessionInput;
use super::session::{AdvisorySessionOutput, SessionId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Digest of one question's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionHash {
    /// Lowercase hex SHA-256 of the UTF-8 question text
    pub hash: String,
    /// Length of the question in characters
    pub length: usize,
}

/// Hash a question's text
pub fn hash_question(text: &str) -> QuestionHash {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    QuestionHash {
        hash: hex::encode(hasher.finalize()),
        length: text.chars().count(),
    }
}

/// Retained summary of an advisory session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorySessionMemoryRecord {
    pub session_id: SessionId,
    /// Creation time (milliseconds since epoch)
    pub created_at: u64,
    pub question_hashes: Vec<QuestionHash>,
    pub agents_used: Vec<String>,
    pub confidence: f64,
    /// Count-only summary
    pub summary: String,
}

impl AdvisorySessionMemoryRecord {
    /// Build the record for a finished session.
    pub fn from_session(input: &AdvisorySessionInput, output: &AdvisorySessionOutput) -> Self {
        Self {
            session_id: output.session_id.clone(),
            created_at: output.created_at,
            question_hashes: input
                .questions
                .iter()
                .map(|q| hash_question(&q.question))
                .collect(),
            agents_used: output.explainability.agents.clone(),
            confidence: output.confidence,
            summary: output.summary(),
        }
    }

    /// Whether the record is past its retention window at `now`
    pub fn is_expired(&self, now: u64, ttl_ms: u64) -> bool {
        now.saturating_sub(self.created_at) > ttl_ms
    }
}
