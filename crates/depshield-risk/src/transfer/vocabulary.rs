//! Risk vocabulary for the file-transfer domain.
//!
//! Deliberately a separate set of types from the secret domain: the two
//! domains share the shape of their vocabularies but not the types, so a
//! level from one domain cannot leak into the other's rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered risk level for file-transfer scoring.
///
/// `Low < Medium < High`; step arithmetic saturates at the bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum RiskLevel {
    /// Low risk.
    #[default]
    Low = 1,
    /// Medium risk.
    Medium = 2,
    /// High risk.
    High = 3,
}

impl RiskLevel {
    /// Raise the level by one step, saturating at `High`.
    #[must_use]
    pub fn step_up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// Lower the level by one step, saturating at `Low`.
    #[must_use]
    pub fn step_down(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    /// Parse a classifier label (case-insensitive).
    ///
    /// Returns `None` for anything other than LOW/MEDIUM/HIGH; callers pick
    /// the documented default for their context.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Primary risk factors scored for a file transfer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFactor {
    /// Data leaving the organization's control.
    DataExfiltration,
    /// Data shared outside its authorized audience.
    ///
    /// Never asserted by the base estimator; introduced only by the
    /// external-context adjuster when the matching influencers run High.
    UnauthorizedSharing,
}

impl RiskFactor {
    /// Every factor the base estimator asserts for a transfer.
    pub const BASE: [RiskFactor; 1] = [Self::DataExfiltration];
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataExfiltration => write!(f, "DATA_EXFILTRATION"),
            Self::UnauthorizedSharing => write!(f, "UNAUTHORIZED_SHARING"),
        }
    }
}

/// Secondary signals that adjust the primary factors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskInfluencer {
    DataExfiltration,
    UnauthorizedSharing,
    SensitiveInformationExposure,
    ComplianceViolation,
    IntellectualPropertyLoss,
    ActivityType,
    FileSize,
}

impl RiskInfluencer {
    /// The full influencer set for the file-transfer domain.
    pub const ALL: [RiskInfluencer; 7] = [
        Self::DataExfiltration,
        Self::UnauthorizedSharing,
        Self::SensitiveInformationExposure,
        Self::ComplianceViolation,
        Self::IntellectualPropertyLoss,
        Self::ActivityType,
        Self::FileSize,
    ];
}

impl fmt::Display for RiskInfluencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataExfiltration => write!(f, "DATA_EXFILTRATION"),
            Self::UnauthorizedSharing => write!(f, "UNAUTHORIZED_SHARING"),
            Self::SensitiveInformationExposure => write!(f, "SENSITIVE_INFORMATION_EXPOSURE"),
            Self::ComplianceViolation => write!(f, "COMPLIANCE_VIOLATION"),
            Self::IntellectualPropertyLoss => write!(f, "INTELLECTUAL_PROPERTY_LOSS"),
            Self::ActivityType => write!(f, "ACTIVITY_TYPE"),
            Self::FileSize => write!(f, "FILE_SIZE"),
        }
    }
}

/// Recommended actions per (factor, level).
///
/// The [`Default`] table is total over both factors, including
/// `UnauthorizedSharing`, which only enters a factor mapping through the
/// external-context adjuster.
#[derive(Debug, Clone)]
pub struct MitigationStrategyTable {
    entries: BTreeMap<(RiskFactor, RiskLevel), String>,
}

impl MitigationStrategyTable {
    /// Create an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the strategy for a (factor, level) pair.
    #[must_use]
    pub fn with_strategy(
        mut self,
        factor: RiskFactor,
        level: RiskLevel,
        strategy: impl Into<String>,
    ) -> Self {
        self.entries.insert((factor, level), strategy.into());
        self
    }

    /// Look up the strategy for a (factor, level) pair.
    #[must_use]
    pub fn strategy(&self, factor: RiskFactor, level: RiskLevel) -> Option<&str> {
        self.entries.get(&(factor, level)).map(String::as_str)
    }
}

impl Default for MitigationStrategyTable {
    fn default() -> Self {
        Self::empty()
            .with_strategy(
                RiskFactor::DataExfiltration,
                RiskLevel::High,
                "Contact legal department and contact employee to ask for justification",
            )
            .with_strategy(
                RiskFactor::DataExfiltration,
                RiskLevel::Medium,
                "Contact employee and ask for justification",
            )
            .with_strategy(
                RiskFactor::DataExfiltration,
                RiskLevel::Low,
                "No action required",
            )
            .with_strategy(
                RiskFactor::UnauthorizedSharing,
                RiskLevel::High,
                "Revoke external shares and notify the security team",
            )
            .with_strategy(
                RiskFactor::UnauthorizedSharing,
                RiskLevel::Medium,
                "Review sharing permissions with the file owner",
            )
            .with_strategy(
                RiskFactor::UnauthorizedSharing,
                RiskLevel::Low,
                "No action required",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering_is_total() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_step_arithmetic_saturates() {
        assert_eq!(RiskLevel::High.step_up(), RiskLevel::High);
        assert_eq!(RiskLevel::Low.step_down(), RiskLevel::Low);
    }

    #[test]
    fn test_factor_display() {
        assert_eq!(RiskFactor::DataExfiltration.to_string(), "DATA_EXFILTRATION");
        assert_eq!(
            RiskFactor::UnauthorizedSharing.to_string(),
            "UNAUTHORIZED_SHARING"
        );
    }

    #[test]
    fn test_default_strategy_table_covers_both_factors() {
        let table = MitigationStrategyTable::default();
        for factor in [RiskFactor::DataExfiltration, RiskFactor::UnauthorizedSharing] {
            for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
                assert!(
                    table.strategy(factor, level).is_some(),
                    "missing strategy for {factor} at {level}"
                );
            }
        }
    }

    #[test]
    fn test_influencer_serde_names() {
        assert_eq!(
            serde_json::to_string(&RiskInfluencer::SensitiveInformationExposure).unwrap(),
            "\"SENSITIVE_INFORMATION_EXPOSURE\""
        );
    }
}
