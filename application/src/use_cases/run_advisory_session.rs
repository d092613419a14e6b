//! Run Advisory Session use case
//!
//! Validates the input, consults the agents of every question strictly in
//! submission order, merges the answers and retains a hash-only record.

use crate::config::AdvisoryParams;
use crate::ports::advisory_agent::{AdvisoryAgent, AgentError, AgentQuery};
use crate::ports::advisory_progress::{AdvisoryProgress, NoProgress};
use crate::ports::session_store::{SessionStore, SessionStoreError};
use std::sync::Arc;
use steward_domain::{
    AdvisorySessionInput, AdvisorySessionMemoryRecord, AdvisorySessionOutput, AgentAnswer,
    AnsweredQuestion, SessionId, ValidationError, aggregate_session, current_timestamp,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during an advisory session
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Question {question_index} has no agents to consult")]
    NoAgents { question_index: usize },

    #[error("Advisory session cancelled")]
    Cancelled,

    #[error("Agent '{agent}' failed on question {question_index}: {source}")]
    Agent {
        agent: String,
        question_index: usize,
        #[source]
        source: AgentError,
    },

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

impl AdvisoryError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AdvisoryError::Cancelled)
    }
}

fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), AdvisoryError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(AdvisoryError::Cancelled);
    }
    Ok(())
}

/// Use case for running an advisory session
pub struct RunAdvisorySessionUseCase<A: AdvisoryAgent + 'static, S: SessionStore + 'static> {
    agent: Arc<A>,
    store: Arc<S>,
    params: AdvisoryParams,
    cancellation_token: Option<CancellationToken>,
}

impl<A: AdvisoryAgent + 'static, S: SessionStore + 'static> RunAdvisorySessionUseCase<A, S> {
    pub fn new(agent: Arc<A>, store: Arc<S>) -> Self {
        Self {
            agent,
            store,
            params: AdvisoryParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: AdvisoryParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token; cancelling aborts the whole session
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: AdvisorySessionInput,
    ) -> Result<AdvisorySessionOutput, AdvisoryError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AdvisorySessionInput,
        progress: &dyn AdvisoryProgress,
    ) -> Result<AdvisorySessionOutput, AdvisoryError> {
        input.validate()?;
        let roster = self.resolve_roster(&input)?;
        check_cancelled(&self.cancellation_token)?;

        let session_id = SessionId::generate();
        let total = input.questions.len();
        info!(session = %session_id, questions = total, "Starting advisory session");

        let mut answered = Vec::with_capacity(total);
        for ((index, question), agents) in input.questions.iter().enumerate().zip(roster) {
            progress.on_question_start(index, total, agents.len());

            let mut answers = Vec::with_capacity(agents.len());
            for agent in agents {
                let query = AgentQuery {
                    question_index: index,
                    agent: agent.clone(),
                    scopes: question.scopes.clone(),
                    question: question.question.clone(),
                };
                let answer = self.consult(&query, progress).await?;
                answers.push(answer);
            }

            progress.on_question_complete(index);
            answered.push(AnsweredQuestion {
                scopes: question.scopes.clone(),
                answers,
            });
        }

        let output = aggregate_session(
            session_id,
            &input.requested_by,
            &answered,
            &self.params.limits,
            current_timestamp(),
        );

        let record = AdvisorySessionMemoryRecord::from_session(&input, &output);
        self.store.save(record).await?;

        info!(
            session = %output.session_id,
            insights = output.cross_insights.len(),
            conflicts = output.conflicts.len(),
            confidence = output.confidence,
            "Advisory session complete"
        );
        Ok(output)
    }

    /// Agents per question; every question must resolve to at least one
    fn resolve_roster(&self, input: &AdvisorySessionInput) -> Result<Vec<Vec<String>>, AdvisoryError> {
        input
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let agents = question.resolve_agents(&self.params.default_agents);
                if agents.is_empty() {
                    return Err(AdvisoryError::NoAgents {
                        question_index: index,
                    });
                }
                Ok(agents)
            })
            .collect()
    }

    /// Retrieve the retained record of a session
    pub async fn get_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AdvisorySessionMemoryRecord>, AdvisoryError> {
        Ok(self.store.get(session_id).await?)
    }

    /// Consult one agent, racing the cancellation token
    async fn consult(
        &self,
        query: &AgentQuery,
        progress: &dyn AdvisoryProgress,
    ) -> Result<AgentAnswer, AdvisoryError> {
        check_cancelled(&self.cancellation_token)?;

        let result = if let Some(ref token) = self.cancellation_token {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    warn!(agent = %query.agent, question = query.question_index, "Agent call cancelled");
                    return Err(AdvisoryError::Cancelled);
                }
                result = self.agent.consult(query) => result,
            }
        } else {
            self.agent.consult(query).await
        };

        match result {
            Ok(mut answer) => {
                debug!(
                    agent = %query.agent,
                    question = query.question_index,
                    recommendations = answer.recommendations.len(),
                    "Agent answered"
                );
                progress.on_agent_complete(query.question_index, &query.agent, true);
                // Attribution follows the agent that was asked
                answer.agent = query.agent.clone();
                Ok(answer)
            }
            Err(e) => {
                warn!(agent = %query.agent, question = query.question_index, "Agent failed: {}", e);
                progress.on_agent_complete(query.question_index, &query.agent, false);
                Err(AdvisoryError::Agent {
                    agent: query.agent.clone(),
                    question_index: query.question_index,
                    source: e,
                })
            }
        }
    }
}
