//! depshield CLI - departure-risk evaluation for departing employees
//!
//! This CLI enables security teams to:
//! - Evaluate one employee's secret-exposure and file-transfer risk
//! - Batch-evaluate a list of employees and export the full assessments
//! - Print deterministic, human-readable risk summaries

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

/// depshield CLI - departure risk assessment
#[derive(Parser)]
#[command(name = "depshield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the departure risk of a single employee
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Evaluate several employees and export the full assessments
    Batch(commands::batch::BatchArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args).await,
        Commands::Batch(args) => commands::batch::run(args).await,
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
