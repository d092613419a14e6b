//! Progress notification port
//!
//! Defines the interface for reporting progress during an advisory session.

/// Callback for progress updates while questions are answered
///
/// Callbacks carry indexes and agent names only, never question text.
pub trait AdvisoryProgress: Send + Sync {
    /// Called before the agents of a question are consulted
    fn on_question_start(&self, index: usize, total: usize, agent_count: usize);

    /// Called after each agent answers or fails
    fn on_agent_complete(&self, index: usize, agent: &str, success: bool);

    /// Called once every agent of a question has answered
    fn on_question_complete(&self, _index: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AdvisoryProgress for NoProgress {
    fn on_question_start(&self, _index: usize, _total: usize, _agent_count: usize) {}
    fn on_agent_complete(&self, _index: usize, _agent: &str, _success: bool) {}
}
