//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use steward_domain::{RiskLevel, Severity};

/// CLI arguments for steward
#[derive(Parser, Debug)]
#[command(name = "steward")]
#[command(author, version, about = "Decision governance - advise, classify, gate and orchestrate")]
#[command(long_about = r#"
Steward turns advisory input into governed, non-executing decisions.

The pipeline has four stages:
1. advise:   consult advisory agents and merge their recommendations
2. classify: assign a status to a proposed decision from its risk level
3. intent:   wrap a decision in a non-executable envelope awaiting approval
4. cycle:    plan autonomy tasks and route them through playbook guardrails

Configuration files are loaded from (in priority order):
1. STEWARD_* env vars   e.g. STEWARD_AUTONOMY__DEFAULT_PAGE_SIZE=20
2. --config <path>      Explicit config file
3. ./steward.toml       Project-level config
4. ~/.config/steward/config.toml   Global config

Example:
  steward advise -q "How to increase sales?" -s sales -a growth -a finance
  steward classify --scope pricing --decision "Raise prices 5%" --proposed-by pricer --risk medium
  steward intent --scope ops --decision "Rotate keys" --proposed-by ops --risk low --approve alice
  steward cycle --plan plan.json --approve-pending alice
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Suppress progress indicators
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an advisory session
    Advise(AdviseArgs),
    /// Classify a proposed decision by risk
    Classify(ClassifyArgs),
    /// Create an execution intent and optionally approve or reject it
    Intent(IntentArgs),
    /// Run one autonomy planning cycle
    Cycle(CycleArgs),
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct AdviseArgs {
    /// JSON file holding the full session input
    #[arg(long, value_name = "PATH", conflicts_with = "question")]
    pub input: Option<PathBuf>,

    /// Single question to ask
    #[arg(short, long)]
    pub question: Option<String>,

    /// Scope of the question (can be specified multiple times)
    #[arg(short, long = "scope", value_name = "SCOPE")]
    pub scopes: Vec<String>,

    /// Agent to consult (can be specified multiple times)
    #[arg(short, long = "agent", value_name = "AGENT")]
    pub agents: Vec<String>,

    /// Agent that argues against the question's proposal
    #[arg(long = "contrarian", value_name = "AGENT")]
    pub contrarians: Vec<String>,

    #[arg(long, default_value = "cli")]
    pub requested_by: String,
}

/// A decision given inline or as a JSON file
#[derive(Args, Debug)]
pub struct DecisionArgs {
    /// JSON file holding the decision object
    #[arg(long = "decision-file", value_name = "PATH", conflicts_with = "decision")]
    pub decision_file: Option<PathBuf>,

    #[arg(long, default_value = "general")]
    pub scope: String,

    /// Decision text
    #[arg(long)]
    pub decision: Option<String>,

    #[arg(long, default_value = "cli")]
    pub proposed_by: String,

    #[arg(long, default_value = "low")]
    pub risk: RiskLevel,

    /// Confidence of the proposing agent (0.0-1.0)
    #[arg(long)]
    pub confidence: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub decision: DecisionArgs,

    /// Primary agent for the decision's scope (defaults to the proposer)
    #[arg(long)]
    pub primary: Option<String>,

    /// Every agent involved, including the primary (can be specified multiple times)
    #[arg(long = "agent", value_name = "AGENT")]
    pub agents: Vec<String>,
}

#[derive(Args, Debug)]
pub struct IntentArgs {
    #[command(flatten)]
    pub classify: ClassifyArgs,

    #[arg(long, default_value = "cli")]
    pub requested_by: String,

    /// Prerequisite that is not yet satisfied (can be specified multiple times)
    #[arg(long = "missing", value_name = "NAME")]
    pub missing: Vec<String>,

    /// Approve the new intent as this user
    #[arg(long, value_name = "USER", conflicts_with = "reject")]
    pub approve: Option<String>,

    /// Reject the new intent as this user
    #[arg(long, value_name = "USER")]
    pub reject: Option<String>,

    #[arg(long, default_value = "")]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct CycleArgs {
    /// JSON file listing planned tasks
    #[arg(long, value_name = "PATH")]
    pub plan: PathBuf,

    /// Only plan tasks for this brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Cap on tasks taken from the plan
    #[arg(long)]
    pub max_tasks: Option<usize>,

    /// Record the plan without touching the task pools
    #[arg(long)]
    pub dry_run: bool,

    /// Approve every pending task as this user after planning
    #[arg(long, value_name = "USER")]
    pub approve_pending: Option<String>,

    /// Re-evaluate every blocked task with this user as approver
    #[arg(long, value_name = "USER")]
    pub approve_blocked: Option<String>,

    /// Reject every pending task with this reason
    #[arg(long, value_name = "REASON", conflicts_with = "approve_pending")]
    pub reject_pending: Option<String>,

    #[command(flatten)]
    pub filters: PendingArgs,
}

#[derive(Args, Debug)]
pub struct PendingArgs {
    /// Pending listing: only this severity
    #[arg(long)]
    pub severity: Option<Severity>,

    /// Pending listing: only this task type
    #[arg(long = "type", value_name = "TYPE")]
    pub task_type: Option<String>,

    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show configuration file locations
    Sources,
    /// Print the merged configuration
    Show,
    /// Report configuration issues
    Validate,
}
