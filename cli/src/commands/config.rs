use crate::args::ConfigCommand;
use anyhow::Result;
use colored::Colorize;
use serde_json::{Value, json};
use std::path::PathBuf;
use steward_infrastructure::{ConfigLoader, FileConfig, Severity};

/// Handle `steward config ...`; returns `None` when the output is plain text.
pub fn run(
    command: ConfigCommand,
    config: &FileConfig,
    config_path: Option<&PathBuf>,
) -> Result<Option<Value>> {
    match command {
        ConfigCommand::Sources => {
            ConfigLoader::print_config_sources(config_path);
            Ok(None)
        }
        ConfigCommand::Show => Ok(Some(serde_json::to_value(config)?)),
        ConfigCommand::Validate => {
            let issues = config.validate();
            for issue in &issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                eprintln!("{}: {}", label, issue.message);
            }
            let errors = issues.iter().filter(|i| i.is_error()).count();
            Ok(Some(json!({
                "valid": errors == 0,
                "errors": errors,
                "warnings": issues.len() - errors,
            })))
        }
    }
}
