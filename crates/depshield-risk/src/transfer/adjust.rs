//! Adjustment stages for file-transfer risk factors.
//!
//! Each stage takes a snapshot of the factor mapping and returns a new one.
//! The external-context stage is the only place `UnauthorizedSharing` can
//! enter a mapping.

use std::collections::BTreeMap;

use crate::transfer::vocabulary::{RiskFactor, RiskInfluencer, RiskLevel};

/// Factor mapping carried between pipeline stages.
pub type RiskFactorLevels = BTreeMap<RiskFactor, RiskLevel>;

/// Apply the static influencer rules: data sensitivity, then activity type.
#[must_use]
pub fn apply_influencers(
    levels: &RiskFactorLevels,
    data_sensitivity: RiskLevel,
    activity_type_risk: RiskLevel,
) -> RiskFactorLevels {
    let mut adjusted = levels.clone();

    // Highly sensitive data dominates every factor outright.
    if data_sensitivity == RiskLevel::High {
        for level in adjusted.values_mut() {
            *level = RiskLevel::High;
        }
    } else if data_sensitivity == RiskLevel::Medium {
        for level in adjusted.values_mut() {
            if *level == RiskLevel::Low {
                *level = RiskLevel::Medium;
            }
        }
    }

    if activity_type_risk == RiskLevel::High {
        adjusted.insert(RiskFactor::DataExfiltration, RiskLevel::High);
    } else if activity_type_risk == RiskLevel::Medium {
        if let Some(level) = adjusted.get_mut(&RiskFactor::DataExfiltration) {
            if *level == RiskLevel::Low {
                *level = RiskLevel::Medium;
            }
        }
    }

    for level in adjusted.values_mut() {
        *level = (*level).clamp(RiskLevel::Low, RiskLevel::High);
    }

    adjusted
}

/// Apply the externally sourced heightened risks.
///
/// Raise-only: influencers at High force the mapped factors to High, and the
/// `UnauthorizedSharing` factor is introduced when its influencers demand it.
#[must_use]
pub fn apply_external_context(
    levels: &RiskFactorLevels,
    heightened_risks: &BTreeMap<RiskInfluencer, RiskLevel>,
) -> RiskFactorLevels {
    let mut adjusted = levels.clone();

    for (influencer, level) in heightened_risks {
        if *level != RiskLevel::High {
            continue;
        }
        match influencer {
            RiskInfluencer::DataExfiltration | RiskInfluencer::SensitiveInformationExposure => {
                adjusted.insert(RiskFactor::DataExfiltration, RiskLevel::High);
            }
            RiskInfluencer::UnauthorizedSharing | RiskInfluencer::IntellectualPropertyLoss => {
                adjusted.insert(RiskFactor::UnauthorizedSharing, RiskLevel::High);
            }
            RiskInfluencer::ComplianceViolation => {
                adjusted.insert(RiskFactor::DataExfiltration, RiskLevel::High);
                adjusted.insert(RiskFactor::UnauthorizedSharing, RiskLevel::High);
            }
            _ => {}
        }
    }

    for level in adjusted.values_mut() {
        *level = (*level).clamp(RiskLevel::Low, RiskLevel::High);
    }

    adjusted
}
