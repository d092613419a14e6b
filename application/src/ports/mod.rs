//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod advisory_agent;
pub mod advisory_progress;
pub mod audit_log;
pub mod governance_engine;
pub mod intent_repository;
pub mod planner;
pub mod session_store;
pub mod task_executor;
