//! In-memory stores for sessions, intents and audit entries.
//!
//! State lives for the lifetime of the process; nothing is persisted.

mod audit_log;
mod intent_repository;
mod session_store;

pub use audit_log::InMemoryAuditLog;
pub use intent_repository::InMemoryIntentRepository;
pub use session_store::{Clock, InMemorySessionStore};
