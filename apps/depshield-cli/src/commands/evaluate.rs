//! `depshield evaluate` - assess one employee.

use clap::Args;
use std::path::PathBuf;

use depshield_risk::types::EmployeeId;

use crate::commands::build_service;
use crate::error::{CliError, CliResult};
use crate::output::render_summary;

/// Arguments for the evaluate command.
#[derive(Args)]
pub struct EvaluateArgs {
    /// Employee ID to evaluate (e.g., emp12345)
    pub user_id: String,

    /// Directory holding secret_metadata.json and file_transfer_metadata.json
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Use deterministic default classifications instead of AI services
    #[arg(long)]
    pub offline: bool,

    /// Write the full assessment as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Run the evaluate command.
pub async fn run(args: EvaluateArgs) -> CliResult<()> {
    let service = build_service(&args.data_dir, args.offline)?;
    let assessment = service
        .evaluate_departure(&EmployeeId::new(args.user_id))
        .await?;

    print!("{}", render_summary(&assessment));

    if let Some(path) = args.json {
        let encoded = serde_json::to_string_pretty(&assessment)?;
        std::fs::write(&path, encoded).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        println!("\nFull risk assessment saved to {}", path.display());
    }

    Ok(())
}
