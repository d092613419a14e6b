//! Dependency injection: builds use cases from the loaded configuration.

use std::path::Path;
use std::sync::Arc;
use steward_application::{
    AuditLog, AutonomyService, DecisionAuthority, ExecutionIntentGovernor, GovernanceParams,
    RunAdvisorySessionUseCase,
};
use steward_infrastructure::{
    ConfigError, DryRunExecutor, FileConfig, GovernanceRules, HeuristicAdvisor,
    InMemoryAuditLog, InMemoryIntentRepository, InMemorySessionStore, JsonFilePlanner,
    JsonlAuditLog, RuleBasedGovernanceEngine,
};
use tracing::{info, warn};

pub struct Components {
    config: FileConfig,
    params: GovernanceParams,
    audit: Arc<dyn AuditLog>,
}

impl Components {
    /// Validate the configuration and open the audit sink.
    ///
    /// Warnings are logged; any error-level issue aborts startup.
    pub fn from_config(config: FileConfig) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();
        for issue in config.validate() {
            if issue.is_error() {
                errors.push(issue.message);
            } else {
                warn!("{}", issue.message);
            }
        }
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors.join("; ")));
        }

        let audit: Arc<dyn AuditLog> = match config.audit.jsonl_path.as_deref() {
            Some(path) => match JsonlAuditLog::new(path) {
                Some(log) => {
                    info!(path = %path.display(), "Audit trail written to JSONL");
                    Arc::new(log)
                }
                None => {
                    warn!("Falling back to in-memory audit trail");
                    Arc::new(InMemoryAuditLog::new())
                }
            },
            None => Arc::new(InMemoryAuditLog::new()),
        };

        Ok(Self {
            params: config.to_governance_params(),
            config,
            audit,
        })
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }

    pub fn audit(&self) -> &dyn AuditLog {
        self.audit.as_ref()
    }

    pub fn advisory_session(
        &self,
        advisor: HeuristicAdvisor,
    ) -> RunAdvisorySessionUseCase<HeuristicAdvisor, InMemorySessionStore> {
        let advisory = self.params.advisory().clone();
        let store = InMemorySessionStore::new(advisory.session_ttl);
        RunAdvisorySessionUseCase::new(Arc::new(advisor), Arc::new(store)).with_params(advisory)
    }

    pub fn decision_authority(&self) -> DecisionAuthority {
        DecisionAuthority::new()
            .with_params(self.params.decision())
            .with_audit_log(self.audit.clone())
    }

    pub fn intent_governor(&self) -> ExecutionIntentGovernor<InMemoryIntentRepository> {
        ExecutionIntentGovernor::new(Arc::new(InMemoryIntentRepository::new()))
            .with_audit_log(self.audit.clone())
    }

    pub fn autonomy_service(
        &self,
        plan: &Path,
    ) -> Result<AutonomyService<JsonFilePlanner, DryRunExecutor>, ConfigError> {
        let guardrails = self.config.playbook_guardrails()?;
        let (rules, _) = GovernanceRules::from_config(&self.config.governance);

        let service = AutonomyService::new(
            Arc::new(JsonFilePlanner::new(plan)),
            Arc::new(DryRunExecutor::new()),
        )
        .with_guardrails(guardrails)
        .with_params(self.params.autonomy())
        .with_audit_log(self.audit.clone());

        if rules.is_empty() {
            return Ok(service);
        }
        Ok(service.with_governance_engine(Arc::new(RuleBasedGovernanceEngine::new(rules))))
    }
}
