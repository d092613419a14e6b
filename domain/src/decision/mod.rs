//! Decision domain
//!
//! A [`DecisionObject`] is a single proposed action. Its status is a pure
//! lookup on its risk level:
//!
//! | Risk   | Status             | Approval required |
//! |--------|--------------------|-------------------|
//! | low    | `PROPOSED`         | as proposed       |
//! | medium | `PENDING_APPROVAL` | yes               |
//! | high   | `BLOCKED`          | yes               |

pub mod classification;
pub mod entities;

pub use classification::{
    Classification, DEFAULT_MAX_SUPPORTING_AGENTS, PRIMARY_AGENT_ERROR, classify_decision,
    status_for_risk,
};
pub use entities::{DecisionId, DecisionObject, DecisionStatus, RiskLevel};
