//! Human-readable rendering of departure-risk assessments.

use depshield_risk::aggregate::{
    DepartureRiskAssessment, SecretRiskSummary, TransferRiskSummary,
};

/// Records previewed per level before truncating with "... and N more".
const PREVIEW_LIMIT: usize = 3;

/// Render the deterministic summary report for one assessment.
#[must_use]
pub fn render_summary(assessment: &DepartureRiskAssessment) -> String {
    let mut summary = format!(
        "Departure Risk Summary for User ID: {}\n",
        assessment.user_id
    );
    summary += &format!(
        "Overall Risk Level: {}\n\n",
        assessment.overall_risk_level
    );

    summary += "Secret Risk Assessment:\n";
    for (label, secrets) in [
        ("HIGH", &assessment.secret_risk.high),
        ("MEDIUM", &assessment.secret_risk.medium),
        ("LOW", &assessment.secret_risk.low),
    ] {
        summary += &format!("  {label} Risk Secrets: {}\n", secrets.len());
        for secret in secrets.iter().take(PREVIEW_LIMIT) {
            summary += &format!("    - {}: {}\n", secret.name, secret_levels(secret));
        }
        if secrets.len() > PREVIEW_LIMIT {
            summary += &format!("    ... and {} more\n", secrets.len() - PREVIEW_LIMIT);
        }
    }

    summary += "\nFile Transfer Risk Assessment:\n";
    for (label, transfers) in [
        ("HIGH", &assessment.file_transfer_risk.high),
        ("MEDIUM", &assessment.file_transfer_risk.medium),
        ("LOW", &assessment.file_transfer_risk.low),
    ] {
        summary += &format!("  {label} Risk Transfers: {}\n", transfers.len());
        for transfer in transfers.iter().take(PREVIEW_LIMIT) {
            summary += &format!("    - {}: {}\n", transfer.name, transfer_levels(transfer));
        }
        if transfers.len() > PREVIEW_LIMIT {
            summary += &format!("    ... and {} more\n", transfers.len() - PREVIEW_LIMIT);
        }
    }

    summary
}

fn secret_levels(summary: &SecretRiskSummary) -> String {
    summary
        .risk_factors
        .values()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn transfer_levels(summary: &TransferRiskSummary) -> String {
    summary
        .risk_factors
        .values()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
