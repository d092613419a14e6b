//! CLI entrypoint for steward
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod commands;
mod progress;
mod wiring;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use std::path::Path;
use steward_infrastructure::ConfigLoader;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use wiring::Components;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref());

    info!("Starting steward");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // === Dependency Injection ===
    let output = match cli.command {
        Command::Config(command) => commands::config::run(command, &config, cli.config.as_ref())?,
        Command::Advise(args) => {
            Some(commands::advise::run(args, &Components::from_config(config)?, cli.quiet).await?)
        }
        Command::Classify(args) => {
            Some(commands::classify::run(args, &Components::from_config(config)?)?)
        }
        Command::Intent(args) => {
            Some(commands::intent::run(args, &Components::from_config(config)?).await?)
        }
        Command::Cycle(args) => {
            Some(commands::cycle::run(args, &Components::from_config(config)?).await?)
        }
    };

    if let Some(output) = output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Console logs go to stderr; `--log-file` adds a non-blocking file writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path.file_name().map(|n| n.to_os_string());
            match file_name {
                Some(file_name) => {
                    let appender = tracing_appender::rolling::never(
                        directory.unwrap_or_else(|| Path::new(".")),
                        file_name,
                    );
                    let (writer, guard) = tracing_appender::non_blocking(appender);
                    let layer = tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(false)
                        .with_filter(EnvFilter::new(level));
                    (Some(layer), Some(guard))
                }
                None => {
                    eprintln!("Warning: --log-file {} has no file name", path.display());
                    (None, None)
                }
            }
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    guard
}
