//! Justification rendering for secret risk factors.
//!
//! Deterministic text built from fixed templates: the factor and its final
//! level, the time-based facts behind the base estimate, a qualitative
//! sentence for High/Medium, and an itemized list of the adjustment rules
//! that fired when the final level differs from the initial one.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::secret::estimator::{
    days_since_last_access, days_until_rotation, NO_ROTATION_SENTINEL_DAYS,
};
use crate::secret::vocabulary::{MitigationStatus, RiskFactor, RiskInfluencer, RiskLevel};
use crate::types::Secret;

/// Render the justification for one factor's final level.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn compose(
    factor: RiskFactor,
    initial_level: RiskLevel,
    final_level: RiskLevel,
    secret: &Secret,
    today: NaiveDate,
    service_criticality: RiskLevel,
    data_sensitivity: RiskLevel,
    external_mitigation: MitigationStatus,
    heightened_risks: &BTreeMap<RiskInfluencer, RiskLevel>,
) -> String {
    let mut text = format!("{factor}: {final_level}\n");

    if factor == RiskFactor::PersistentAccessRisk {
        let until_rotation = days_until_rotation(secret, today);
        let since_access = days_since_last_access(secret, today);

        text.push_str(&format!(
            "This secret was last accessed {since_access} days ago"
        ));
        if until_rotation == NO_ROTATION_SENTINEL_DAYS {
            text.push_str(" and is not scheduled for rotation.");
        } else {
            text.push_str(&format!(
                " and is due for rotation in {until_rotation} days."
            ));
        }

        match final_level {
            RiskLevel::High => text.push_str(
                " This represents a high risk due to recent access and distant rotation date.",
            ),
            RiskLevel::Medium => text.push_str(
                " This represents a medium risk due to either recent access or a somewhat distant rotation date.",
            ),
            RiskLevel::Low => {}
        }
    }

    if final_level != initial_level {
        text.push_str("\nRisk level was adjusted due to:");
        if service_criticality != RiskLevel::Low {
            text.push_str(&format!(
                "\n- The service '{}' is considered critical.",
                secret.service
            ));
        }
        if data_sensitivity != RiskLevel::Low {
            text.push_str("\n- The data accessed is considered sensitive.");
        }
        if external_mitigation != MitigationStatus::Absent {
            text.push_str("\n- There are some external mitigation measures in place.");
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
