//! Adjustment stages for secret risk factors.
//!
//! Each stage takes a snapshot of the factor mapping and returns a new one;
//! nothing is mutated in place. Every stage clamps its output to
//! `[Low, High]` after the rule batch.

use std::collections::BTreeMap;

use crate::secret::vocabulary::{MitigationStatus, RiskFactor, RiskInfluencer, RiskLevel};

/// Factor mapping carried between pipeline stages.
pub type RiskFactorLevels = BTreeMap<RiskFactor, RiskLevel>;

/// Apply the static influencer rules: service criticality, then data
/// sensitivity.
#[must_use]
pub fn apply_influencers(
    levels: &RiskFactorLevels,
    service_criticality: RiskLevel,
    data_sensitivity: RiskLevel,
) -> RiskFactorLevels {
    let mut adjusted = levels.clone();

    // A non-critical service softens every factor one step.
    if service_criticality == RiskLevel::Low {
        for level in adjusted.values_mut() {
            if *level != RiskLevel::Low {
                *level = level.step_down();
            }
        }
    }

    // Sensitive data hardens every factor one step.
    if matches!(data_sensitivity, RiskLevel::Medium | RiskLevel::High) {
        for level in adjusted.values_mut() {
            if *level != RiskLevel::High {
                *level = level.step_up();
            }
        }
    }

    for level in adjusted.values_mut() {
        *level = (*level).clamp(RiskLevel::Low, RiskLevel::High);
    }

    adjusted
}

/// Apply the externally sourced context: mitigation status, then heightened
/// risks.
///
/// Mitigation demotion is the only rule in this stage that can lower a
/// factor; heightened risks only force factors to `High`.
#[must_use]
pub fn apply_external_context(
    levels: &RiskFactorLevels,
    external_mitigation: MitigationStatus,
    heightened_risks: &BTreeMap<RiskInfluencer, RiskLevel>,
) -> RiskFactorLevels {
    let mut adjusted = levels.clone();

    if external_mitigation == MitigationStatus::Present {
        for level in adjusted.values_mut() {
            if *level != RiskLevel::Low {
                *level = level.step_down();
            }
        }
    }

    for (influencer, level) in heightened_risks {
        if *level != RiskLevel::High {
            continue;
        }
        match influencer {
            RiskInfluencer::SystemCompromise
            | RiskInfluencer::ComplianceViolation
            | RiskInfluencer::IntellectualPropertyTheft => {
                adjusted.insert(RiskFactor::PersistentAccessRisk, RiskLevel::High);
            }
            _ => {}
        }
    }

    for level in adjusted.values_mut() {
        *level = (*level).clamp(RiskLevel::Low, RiskLevel::High);
    }

    adjusted
}
