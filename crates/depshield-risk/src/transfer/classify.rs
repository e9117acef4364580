//! Classifier capability traits for the file-transfer domain.
//!
//! No mitigation classification exists for transfers; the external context
//! is the heightened-risk mapping alone.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transfer::vocabulary::{RiskInfluencer, RiskLevel};
use crate::types::FileTransfer;

/// Classifies how sensitive described data is.
#[async_trait]
pub trait SensitivityClassifier: Send + Sync {
    /// Classify the sensitivity of a transfer's description.
    async fn classify_sensitivity(&self, description: &str) -> RiskLevel;
}

/// Reports externally observed heightened risks per influencer.
#[async_trait]
pub trait HeightenedRiskClassifier: Send + Sync {
    /// Classify heightened risks for a file transfer.
    ///
    /// The result is total over [`RiskInfluencer::ALL`]; vectors the
    /// implementation cannot resolve default to `Low`.
    async fn classify_heightened_risks(
        &self,
        transfer: &FileTransfer,
    ) -> BTreeMap<RiskInfluencer, RiskLevel>;
}

/// The raw external-context payload consumed by the context adjuster and
/// echoed into record summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRiskContext {
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
pub struct StaticTransferClassifier {
    sensitivity: RiskLevel,
    heightened_risks: BTreeMap<RiskInfluencer, RiskLevel>,
}

impl StaticTransferClassifier {
    /// Create a classifier that reports the documented safe defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sensitivity: RiskLevel::Medium,
            heightened_risks: all_low_heightened_risks(),
        }
    }

    /// Set the sensitivity level to report.
    #[must_use]
    pub fn with_sensitivity(mut self, level: RiskLevel) -> Self {
        self.sensitivity = level;
        self
    }

    /// Set one heightened-risk vector to report.
    #[must_use]
    pub fn with_heightened_risk(mut self, influencer: RiskInfluencer, level: RiskLevel) -> Self {
        self.heightened_risks.insert(influencer, level);
        self
    }
}

impl Default for StaticTransferClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensitivityClassifier for StaticTransferClassifier {
    async fn classify_sensitivity(&self, _description: &str) -> RiskLevel {
        self.sensitivity
    }
}

#[async_trait]
impl HeightenedRiskClassifier for StaticTransferClassifier {
    async fn classify_heightened_risks(
        &self,
        _transfer: &FileTransfer,
    ) -> BTreeMap<RiskInfluencer, RiskLevel> {
        self.heightened_risks.clone()
    }
}
