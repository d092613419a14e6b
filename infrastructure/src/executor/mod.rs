//! Task executor adapters.

mod dry_run;

pub use dry_run::DryRunExecutor;
