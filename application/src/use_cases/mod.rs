//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod autonomy;
pub mod decision_authority;
pub mod execution_intent;
pub mod run_advisory_session;
