//! `depshield batch` - assess several employees and export the results.

use clap::Args;
use std::path::PathBuf;
use tracing::warn;

use depshield_risk::types::EmployeeId;
use depshield_risk::RiskError;

use crate::commands::build_service;
use crate::error::{CliError, CliResult};
use crate::output::render_summary;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Employee IDs to evaluate
    #[arg(required = true)]
    pub user_ids: Vec<String>,

    /// Directory holding secret_metadata.json and file_transfer_metadata.json
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Use deterministic default classifications instead of AI services
    #[arg(long)]
    pub offline: bool,

    /// Where to write the full assessments as a JSON array
    #[arg(long, default_value = "departure_risks.json")]
    pub output: PathBuf,
}

/// Run the batch command.
///
/// Unknown employees are reported and skipped; they never abort the batch.
pub async fn run(args: BatchArgs) -> CliResult<()> {
    let service = build_service(&args.data_dir, args.offline)?;

    let mut assessments = Vec::new();
    for user_id in &args.user_ids {
        let employee_id = EmployeeId::new(user_id.clone());
        match service.evaluate_departure(&employee_id).await {
            Ok(assessment) => {
                print!("{}", render_summary(&assessment));
                println!("\n{}\n", "-".repeat(50));
                assessments.push(assessment);
            }
            Err(RiskError::EmployeeNotFound(id)) => {
                warn!(employee = %id, "employee not found, skipping");
                println!("Employee not found: {id}\n\n{}\n", "-".repeat(50));
            }
            Err(error) => return Err(error.into()),
        }
    }

    let encoded = serde_json::to_string_pretty(&assessments)?;
    std::fs::write(&args.output, encoded).map_err(|source| CliError::Io {
        path: args.output.display().to_string(),
        source,
    })?;
    println!(
        "\nFull risk assessments saved to {}",
        args.output.display()
    );

    Ok(())
}
