//! Governance engine adapters.

mod rule_engine;

pub use rule_engine::{GovernanceRules, RuleBasedGovernanceEngine};
