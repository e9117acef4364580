//! Per-record evaluation pipeline for the file-transfer domain.
//!
//! Mirrors the secret pipeline: base estimate, influencer adjustment,
//! external-context adjustment, justification. Transfers carry no mitigation
//! input; the external context is the heightened-risk mapping alone.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, RiskError};
use crate::transfer::adjust::{self, RiskFactorLevels};
use crate::transfer::classify::{
    HeightenedRiskClassifier, SensitivityClassifier, TransferRiskContext,
};
use crate::transfer::estimator;
use crate::transfer::justify;
use crate::transfer::vocabulary::{MitigationStrategyTable, RiskFactor, RiskLevel};
use crate::types::FileTransfer;

/// The outcome of evaluating one file transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRiskEvaluation {
    /// Final level per risk factor.
    pub levels: BTreeMap<RiskFactor, RiskLevel>,
    /// Deterministic explanation per risk factor.
    pub justifications: BTreeMap<RiskFactor, String>,
    /// Recommended action per risk factor.
    pub strategies: BTreeMap<RiskFactor, String>,
    /// The raw external-context payload used during adjustment.
    pub context: TransferRiskContext,
}

impl TransferRiskEvaluation {
    /// The worst level across all factors.
    #[must_use]
    pub fn max_level(&self) -> RiskLevel {
        self.levels.values().copied().max().unwrap_or_default()
    }
}

/// Evaluates file transfers through the four-stage risk pipeline.
pub struct TransferRiskEvaluator {
    sensitivity: Arc<dyn SensitivityClassifier>,
    heightened: Arc<dyn HeightenedRiskClassifier>,
    strategies: MitigationStrategyTable,
    reference_date: Option<NaiveDate>,
}

impl TransferRiskEvaluator {
    /// Create a new evaluator with the default strategy table.
    pub fn new(
        sensitivity: Arc<dyn SensitivityClassifier>,
        heightened: Arc<dyn HeightenedRiskClassifier>,
    ) -> Self {
        Self {
            sensitivity,
            heightened,
            strategies: MitigationStrategyTable::default(),
            reference_date: None,
        }
    }

    /// Replace the mitigation-strategy table.
    #[must_use]
    pub fn with_strategies(mut self, strategies: MitigationStrategyTable) -> Self {
        self.strategies = strategies;
        self
    }

    /// Pin the date used for day arithmetic (defaults to today).
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Evaluate one file-transfer record.
    pub async fn evaluate_record(&self, transfer: &FileTransfer) -> Result<TransferRiskEvaluation> {
        let today = self.today();
        let days_since = estimator::days_since_activity(transfer, today);

        // BASE
        let base = estimator::base_data_exfiltration_risk(days_since, transfer);
        let initial: RiskFactorLevels = BTreeMap::from([(RiskFactor::DataExfiltration, base)]);

        // INFLUENCED
        let sensitivity = self
            .sensitivity
            .classify_sensitivity(&transfer.description)
            .await;
        let activity_risk = estimator::activity_type_risk(&transfer.activity_type);
        let influenced = adjust::apply_influencers(&initial, sensitivity, activity_risk);

        // CONTEXTUALIZED
        let context = TransferRiskContext {
            heightened_risks: self.heightened.classify_heightened_risks(transfer).await,
        };
        let levels = adjust::apply_external_context(&influenced, &context.heightened_risks);

        // JUSTIFIED
        let mut justifications = BTreeMap::new();
        let mut strategies = BTreeMap::new();
        for (factor, level) in &levels {
            // A factor introduced by the context adjuster was absent from the
            // base mapping; its initial level degrades to Low.
            let initial_level = initial.get(factor).copied().unwrap_or_default();
            justifications.insert(
                *factor,
                justify::compose(
                    *factor,
                    initial_level,
                    *level,
                    transfer,
                    days_since,
                    sensitivity,
                    activity_risk,
                    &context.heightened_risks,
                ),
            );
            let strategy = self.strategies.strategy(*factor, *level).ok_or_else(|| {
                RiskError::MissingStrategy {
                    factor: factor.to_string(),
                    level: level.to_string(),
                }
            })?;
            strategies.insert(*factor, strategy.to_string());
        }

        Ok(TransferRiskEvaluation {
            levels,
            justifications,
            strategies,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::classify::StaticTransferClassifier;
    use crate::transfer::vocabulary::RiskInfluencer;
    use crate::types::{ActivityId, TransferLocation};

    fn evaluator(classifier: StaticTransferClassifier) -> TransferRiskEvaluator {
        let classifier = Arc::new(classifier);
        TransferRiskEvaluator::new(classifier.clone(), classifier)
            .with_reference_date("2026-02-01".parse().unwrap())
    }

    fn transfer(
        timestamp: &str,
        size_mb: f64,
        destination: &str,
        sharing_status: &str,
    ) -> FileTransfer {
        FileTransfer {
            activity_id: ActivityId::new("act-001"),
            name: "export.zip".to_string(),
            activity_type: "File Download".to_string(),
            description: "Archived project files".to_string(),
            timestamp: timestamp.parse().unwrap(),
            size_mb,
            location: TransferLocation {
                source: "corp-share".to_string(),
                destination: destination.to_string(),
            },
            sharing_status: sharing_status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_every_base_factor_present_in_result() {
        let eval = evaluator(StaticTransferClassifier::new())
            .evaluate_record(&transfer("2026-01-30T10:00:00Z", 5.0, "personal-drive", "internal"))
            .await
            .unwrap();
        for factor in RiskFactor::BASE {
            assert!(eval.levels.contains_key(&factor));
            assert!(eval.justifications.contains_key(&factor));
            assert!(eval.strategies.contains_key(&factor));
        }
    }

    #[tokio::test]
    async fn test_recent_personal_destination_scores_high() {
        // 2 days old, 5 MB, personal destination, internal sharing: the first
        // clause fires on recency + destination alone.
        let eval = evaluator(StaticTransferClassifier::new().with_sensitivity(RiskLevel::Low))
            .evaluate_record(&transfer("2026-01-30T10:00:00Z", 5.0, "personal-drive", "internal"))
            .await
            .unwrap();
        assert_eq!(eval.levels[&RiskFactor::DataExfiltration], RiskLevel::High);
        assert_eq!(
            eval.strategies[&RiskFactor::DataExfiltration],
            "Contact legal department and contact employee to ask for justification"
        );
    }

    #[tokio::test]
    async fn test_introduced_sharing_factor_gets_strategy_and_justification() {
        let eval = evaluator(
            StaticTransferClassifier::new()
                .with_sensitivity(RiskLevel::Low)
                .with_heightened_risk(RiskInfluencer::IntellectualPropertyLoss, RiskLevel::High),
        )
        .evaluate_record(&transfer("2025-06-01T10:00:00Z", 1.0, "corp-share", "internal"))
        .await
        .unwrap();
        assert_eq!(
            eval.levels[&RiskFactor::UnauthorizedSharing],
            RiskLevel::High
        );
        assert_eq!(
            eval.strategies[&RiskFactor::UnauthorizedSharing],
            "Revoke external shares and notify the security team"
        );
        assert!(eval.justifications[&RiskFactor::UnauthorizedSharing]
            .contains("INTELLECTUAL_PROPERTY_LOSS"));
    }

    #[tokio::test]
    async fn test_missing_strategy_is_fatal() {
        let err = evaluator(StaticTransferClassifier::new())
            .with_strategies(MitigationStrategyTable::empty())
            .evaluate_record(&transfer("2026-01-30T10:00:00Z", 5.0, "corp-share", "internal"))
            .await
            .unwrap_err();
        assert!(matches!(err, RiskError::MissingStrategy { .. }));
    }

    #[tokio::test]
    async fn test_evaluation_is_deterministic() {
        let record = transfer("2026-01-30T10:00:00Z", 150.0, "personal-usb", "restricted");
        let classifier = StaticTransferClassifier::new()
            .with_heightened_risk(RiskInfluencer::ComplianceViolation, RiskLevel::High);
        let first = evaluator(classifier.clone())
            .evaluate_record(&record)
            .await
            .unwrap();
        let second = evaluator(classifier).evaluate_record(&record).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_evaluation_round_trips_through_json() {
        let eval = evaluator(StaticTransferClassifier::new())
            .evaluate_record(&transfer("2026-01-30T10:00:00Z", 5.0, "corp-share", "internal"))
            .await
            .unwrap();
        let json = serde_json::to_string(&eval).unwrap();
        let back: TransferRiskEvaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eval);
    }
}
