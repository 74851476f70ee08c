//! Job Board CLI - runs repository operations against the configured store

mod commands;
mod logging;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use jobboard_core::port::JobListingRepository;
use jobboard_infra_mongo::MongoJobListingRepository;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use commands::Commands;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Job board store CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (toml, yaml or json)
    #[arg(long, env = "JOBBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Store URI, overrides config file and environment
    #[arg(long)]
    uri: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();

    let store_config = settings::load_store_config(cli.config.as_deref(), cli.uri.as_deref())
        .context("Failed to load store config")?;

    info!(
        version = jobboard_core::VERSION,
        database = %store_config.database,
        "Connecting to store..."
    );

    let repo = MongoJobListingRepository::connect(&store_config)
        .await
        .context("Failed to connect to store")?;

    let result = run(&repo, cli.command, cli.json).await;

    // Close the pool on every exit path before reporting
    repo.shutdown().await;
    result
}

/// One-line error report with the full context chain
fn format_error(e: &anyhow::Error) -> String {
    format!("{} {:#}", "✗".red().bold(), e)
}

async fn run(repo: &dyn JobListingRepository, command: Commands, json: bool) -> Result<()> {
    let output = commands::execute(repo, command)
        .await
        .context("Store operation failed")?;

    println!("{}", commands::render(&output, json)?);
    Ok(())
}
