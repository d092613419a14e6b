//! Advisory agent adapters.

mod heuristic;

pub use heuristic::{AdvisorProfile, HeuristicAdvisor, Stance};
