//! Justification rendering for file-transfer risk factors.
//!
//! Deterministic text: the factor and its final level, the transfer facts
//! behind the base estimate (only for the exfiltration factor), a
//! qualitative sentence for High/Medium, and an itemized adjustment list
//! when the final level differs from the initial one.

use std::collections::BTreeMap;

use crate::transfer::vocabulary::{RiskFactor, RiskInfluencer, RiskLevel};
use crate::types::FileTransfer;

/// Render the justification for one factor's final level.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn compose(
    factor: RiskFactor,
    initial_level: RiskLevel,
    final_level: RiskLevel,
    transfer: &FileTransfer,
    days_since_activity: i64,
    data_sensitivity: RiskLevel,
    activity_type_risk: RiskLevel,
    heightened_risks: &BTreeMap<RiskInfluencer, RiskLevel>,
) -> String {
    let mut text = format!("{factor}: {final_level}\n");

    if factor == RiskFactor::DataExfiltration {
        text.push_str(&format!(
            "This file transfer occurred {days_since_activity} days ago. "
        ));
        text.push_str(&format!("The file size is {} MB. ", transfer.size_mb));
        text.push_str(&format!(
            "It was transferred from {} to {}. ",
            transfer.location.source, transfer.location.destination
        ));
        text.push_str(&format!(
            "The sharing status is '{}'.\n",
            transfer.sharing_status
        ));

        match final_level {
            RiskLevel::High => text.push_str(
                "This represents a high risk due to recent activity, large file size, or sensitive destination/sharing status.",
            ),
            RiskLevel::Medium => text.push_str(
                "This represents a medium risk due to relatively recent activity, moderate file size, or somewhat sensitive destination/sharing status.",
            ),
            RiskLevel::Low => {}
        }
    }

    if final_level != initial_level {
        text.push_str("\nRisk level was adjusted due to:");
        if data_sensitivity != RiskLevel::Low {
            text.push_str("\n- The transferred data is considered sensitive.");
        }
        if activity_type_risk != RiskLevel::Low {
            text.push_str(&format!(
                "\n- The activity type '{}' is considered risky.",
                transfer.activity_type
            ));
        }
        let high_risks: Vec<String> = heightened_risks
            .iter()
            .filter(|(_, level)| **level == RiskLevel::High)
            .map(|(influencer, _)| influencer.to_string())
            .collect();
        if !high_risks.is_empty() {
            text.push_str(&format!(
                "\n- There are heightened risks in the following areas: {}.",
                high_risks.join(", ")
            ));
        }
    }

    text.trim().to_string()
}
