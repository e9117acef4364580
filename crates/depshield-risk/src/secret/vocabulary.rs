//! Risk vocabulary for the secret-exposure domain.
//!
//! Defines the ordered risk level, the primary risk factors, the secondary
//! influencers reported by external classifiers, the mitigation status, and
//! the mitigation-strategy lookup table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered risk level for secret-exposure scoring.
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

/// Primary risk factors scored for a secret.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFactor {
    /// Exposure window left open by a long-lived, recently used secret.
    PersistentAccessRisk,
}

impl RiskFactor {
    /// Every factor the base estimator asserts for a secret.
    pub const BASE: [RiskFactor; 1] = [Self::PersistentAccessRisk];
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersistentAccessRisk => write!(f, "PERSISTENT_ACCESS_RISK"),
        }
    }
}

/// Secondary signals that adjust the primary factors.
///
/// Influencers feed the adjustment rules; they never appear as keys of the
/// final factor mapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskInfluencer {
    DataExfiltration,
    UnauthorizedAccess,
    SystemCompromise,
    ComplianceViolation,
    IntellectualPropertyTheft,
    ServiceCriticality,
    DataSensitivity,
}

impl RiskInfluencer {
    /// The full influencer set for the secret domain.
    pub const ALL: [RiskInfluencer; 7] = [
        Self::DataExfiltration,
        Self::UnauthorizedAccess,
        Self::SystemCompromise,
        Self::ComplianceViolation,
        Self::IntellectualPropertyTheft,
        Self::ServiceCriticality,
        Self::DataSensitivity,
    ];
}

impl fmt::Display for RiskInfluencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataExfiltration => write!(f, "DATA_EXFILTRATION"),
            Self::UnauthorizedAccess => write!(f, "UNAUTHORIZED_ACCESS"),
            Self::SystemCompromise => write!(f, "SYSTEM_COMPROMISE"),
            Self::ComplianceViolation => write!(f, "COMPLIANCE_VIOLATION"),
            Self::IntellectualPropertyTheft => write!(f, "INTELLECTUAL_PROPERTY_THEFT"),
            Self::ServiceCriticality => write!(f, "SERVICE_CRITICALITY"),
            Self::DataSensitivity => write!(f, "DATA_SENSITIVITY"),
        }
    }
}

/// Whether external controls are believed to reduce a secret's risk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum MitigationStatus {
    /// Mitigation measures are in place; demotes each non-Low factor one step.
    Present,
    /// Some mitigation exists but is incomplete; no demotion applies.
    Partial,
    /// No mitigation is known.
    #[default]
    Absent,
}

impl fmt::Display for MitigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "PRESENT"),
            Self::Partial => write!(f, "PARTIAL"),
            Self::Absent => write!(f, "ABSENT"),
        }
    }
}

/// Recommended actions per (factor, level).
///
/// The [`Default`] table is total over every factor the pipeline can
/// produce; the evaluator fails with `MissingStrategy` when given a table
/// with a hole.
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
                RiskFactor::PersistentAccessRisk,
                RiskLevel::High,
                "Rotate key within the next 7 days",
            )
            .with_strategy(
                RiskFactor::PersistentAccessRisk,
                RiskLevel::Medium,
                "Rotate key within the next 30 days",
            )
            .with_strategy(
                RiskFactor::PersistentAccessRisk,
                RiskLevel::Low,
                "Track any anomalous actions",
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
        assert!(RiskLevel::Low < RiskLevel::High);
    }

    #[test]
    fn test_risk_level_step_arithmetic_saturates() {
        assert_eq!(RiskLevel::High.step_up(), RiskLevel::High);
        assert_eq!(RiskLevel::Low.step_down(), RiskLevel::Low);
        assert_eq!(RiskLevel::Low.step_up(), RiskLevel::Medium);
        assert_eq!(RiskLevel::High.step_down(), RiskLevel::Medium);
    }

    #[test]
    fn test_risk_level_clamp_idempotent() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let clamped = level.clamp(RiskLevel::Low, RiskLevel::High);
            assert_eq!(clamped, level);
            assert_eq!(clamped.clamp(RiskLevel::Low, RiskLevel::High), clamped);
        }
    }

    #[test]
    fn test_risk_level_from_label() {
        assert_eq!(RiskLevel::from_label("high"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_label(" MEDIUM "), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_label("unknown"), None);
    }

    #[test]
    fn test_risk_level_serde_names() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::High).unwrap(),
            "\"HIGH\""
        );
        let back: RiskLevel = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(back, RiskLevel::Low);
    }

    #[test]
    fn test_risk_factor_display() {
        assert_eq!(
            RiskFactor::PersistentAccessRisk.to_string(),
            "PERSISTENT_ACCESS_RISK"
        );
    }

    #[test]
    fn test_default_strategy_table_is_total() {
        let table = MitigationStrategyTable::default();
        for factor in RiskFactor::BASE {
            for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
                assert!(
                    table.strategy(factor, level).is_some(),
                    "missing strategy for {factor} at {level}"
                );
            }
        }
    }

    #[test]
    fn test_empty_strategy_table_has_no_entries() {
        let table = MitigationStrategyTable::empty();
        assert!(table
            .strategy(RiskFactor::PersistentAccessRisk, RiskLevel::High)
            .is_none());
    }
}
