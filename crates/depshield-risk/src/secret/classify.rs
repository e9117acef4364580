//! Classifier capability traits for the secret domain.
//!
//! The engine consumes classifications through these traits; the transport
//! behind them is a separate concern. Implementations absorb their own
//! failures into documented defaults (sensitivity: Medium, mitigation:
//! Absent, heightened risks: all-Low) instead of surfacing errors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::secret::vocabulary::{MitigationStatus, RiskInfluencer, RiskLevel};
use crate::types::Secret;

/// Classifies how sensitive described data is.
#[async_trait]
pub trait SensitivityClassifier: Send + Sync {
    /// Classify the sensitivity of a secret's description.
    async fn classify_sensitivity(&self, description: &str) -> RiskLevel;
}

/// Reports externally observed heightened risks per influencer.
#[async_trait]
pub trait HeightenedRiskClassifier: Send + Sync {
    /// Classify heightened risks for a secret.
    ///
    /// The result is total over [`RiskInfluencer::ALL`]; vectors the
    /// implementation cannot resolve default to `Low`.
    async fn classify_heightened_risks(
        &self,
        secret: &Secret,
    ) -> BTreeMap<RiskInfluencer, RiskLevel>;
}

/// Reports whether external mitigation measures protect a secret.
#[async_trait]
pub trait MitigationClassifier: Send + Sync {
    /// Classify the mitigation status of a secret.
    async fn classify_mitigation(&self, secret: &Secret) -> MitigationStatus;
}

/// The raw external-context payload consumed by the context adjuster and
/// echoed into record summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRiskContext {
    /// Externally assessed mitigation status.
    pub external_mitigation: MitigationStatus,
    /// Externally assessed heightened risks per influencer.
    pub heightened_risks: BTreeMap<RiskInfluencer, RiskLevel>,
}

/// An all-Low heightened-risk mapping, total over the influencer set.
///
/// This is the documented safe default when the external classifier is
/// unreachable or returns an unusable payload.
#[must_use]
pub fn all_low_heightened_risks() -> BTreeMap<RiskInfluencer, RiskLevel> {
    RiskInfluencer::ALL
        .into_iter()
        .map(|influencer| (influencer, RiskLevel::Low))
        .collect()
}

/// Deterministic classifier returning configured constants, for tests and
/// offline runs.
#[derive(Debug, Clone)]
pub struct StaticSecretClassifier {
    sensitivity: RiskLevel,
    mitigation: MitigationStatus,
    heightened_risks: BTreeMap<RiskInfluencer, RiskLevel>,
}

impl StaticSecretClassifier {
    /// Create a classifier that reports the documented safe defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sensitivity: RiskLevel::Medium,
            mitigation: MitigationStatus::Absent,
            heightened_risks: all_low_heightened_risks(),
        }
    }

    /// Set the sensitivity level to report.
    #[must_use]
    pub fn with_sensitivity(mut self, level: RiskLevel) -> Self {
        self.sensitivity = level;
        self
    }

    /// Set the mitigation status to report.
    #[must_use]
    pub fn with_mitigation(mut self, status: MitigationStatus) -> Self {
        self.mitigation = status;
        self
    }

    /// Set one heightened-risk vector to report.
    #[must_use]
    pub fn with_heightened_risk(mut self, influencer: RiskInfluencer, level: RiskLevel) -> Self {
        self.heightened_risks.insert(influencer, level);
        self
    }
}

impl Default for StaticSecretClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensitivityClassifier for StaticSecretClassifier {
    async fn classify_sensitivity(&self, _description: &str) -> RiskLevel {
        self.sensitivity
    }
}

#[async_trait]
impl HeightenedRiskClassifier for StaticSecretClassifier {
    async fn classify_heightened_risks(
        &self,
        _secret: &Secret,
    ) -> BTreeMap<RiskInfluencer, RiskLevel> {
        self.heightened_risks.clone()
    }
}

#[async_trait]
impl MitigationClassifier for StaticSecretClassifier {
    async fn classify_mitigation(&self, _secret: &Secret) -> MitigationStatus {
        self.mitigation
    }
}
