//! Advisory session domain
//!
//! An advisory session is one batch of 1–10 questions, each answered by up
//! to three advisory agents. The answers are merged deterministically:
//!
//! ```text
//! answers (submission order)
//!        ↓
//! normalize → dedup → cap        = cross insights
//! antonym verb scan → group      = conflicts
//! mean ± adjustments → clamp     = aggregate confidence
//! ```
//!
//! Only an [`AdvisorySessionMemoryRecord`] outlives the call, and it holds
//! SHA-256 hashes of the questions, never their text.

pub mod aggregate;
pub mod conflict;
pub mod normalize;
pub mod question;
pub mod record;
pub mod session;

pub use question::{AdvisoryQuestion, AdvisorySessionInput};
pub use record::{AdvisorySessionMemoryRecord, QuestionHash, hash_question};
pub use session::{
    AdvisorySessionOutput, AgentAnswer, AgentRecommendation, Conflict, CrossInsight,
    Explainability, QuestionResult, SessionId,
};
