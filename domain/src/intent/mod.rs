//! Execution intent domain
//!
//! An [`ExecutionIntent`] wraps one decision in a "cannot execute"
//! envelope and tracks a one-shot human approval:
//!
//! ```text
//! PENDING ──approve──→ APPROVED   (terminal, handoff payload available)
//!    │
//!    └────reject────→ REJECTED   (terminal)
//! ```
//!
//! Both transitions are refused while the intent is blocked.

pub mod entities;
pub mod plan;

pub use entities::{
    ADVISORY_BANNER, Approval, ApprovalStatus, ExecutionIntent, HandoffPayload, IntentId,
    SafetyBlock, SafetyConstraints,
};
pub use plan::{ExecutionPlan, normalize_plan};
