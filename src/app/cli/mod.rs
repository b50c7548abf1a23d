//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ProjectSource};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(
    about = "Keep a GitHub portfolio page and its projects config in sync",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the projects config from the account's public repositories
    #[clap(visible_alias = "s")]
    Sync,
    /// Render the portfolio page from the projects config
    #[clap(visible_alias = "r")]
    Render {
        /// Write the page here instead of the configured location
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<(), AppError> = match cli.command {
        Commands::Sync => run_sync(),
        Commands::Render { output } => run_render(output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `info`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run_sync() -> Result<(), AppError> {
    let outcome = api::sync()?;
    info!(
        total = outcome.total,
        training = outcome.training,
        projects = outcome.projects,
        preserved = outcome.preserved,
        "Sync complete"
    );

    println!("✅ Updated {}", outcome.location);
    println!("  Total public repositories: {}", outcome.total);
    println!("  Training: {}", outcome.training);
    println!("  Projects: {}", outcome.projects);
    if outcome.preserved > 0 {
        println!("  Kept {} manual classification(s)", outcome.preserved);
    }
    Ok(())
}

fn run_render(output: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = api::render(output)?;
    info!(
        source = ?outcome.source,
        training = outcome.training,
        projects = outcome.projects,
        "Render complete"
    );

    match outcome.source {
        ProjectSource::Unavailable => {
            println!("⚠️  No repositories available, rendered error page to {}", outcome.location)
        }
        ProjectSource::StoredConfig | ProjectSource::LiveApi => {
            println!("✅ Rendered {}", outcome.location);
            println!("  Projects: {}", outcome.projects);
            println!("  Training: {}", outcome.training);
        }
    }
    Ok(())
}
