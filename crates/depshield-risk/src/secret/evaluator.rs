//! Per-record evaluation pipeline for the secret domain.
//!
//! A single strictly ordered pass per record: base estimate, influencer
//! adjustment, external-context adjustment, justification. The only fatal
//! error is a hole in the mitigation-strategy table.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, RiskError};
use crate::secret::adjust::{self, RiskFactorLevels};
use crate::secret::classify::{
    HeightenedRiskClassifier, MitigationClassifier, SecretRiskContext, SensitivityClassifier,
};
use crate::secret::estimator;
use crate::secret::justify;
use crate::secret::vocabulary::{MitigationStrategyTable, RiskFactor, RiskLevel};
use crate::types::Secret;

/// The outcome of evaluating one secret.
///
/// Created fresh per record and consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRiskEvaluation {
    /// Final level per risk factor.
    pub levels: BTreeMap<RiskFactor, RiskLevel>,
    /// Deterministic explanation per risk factor.
    pub justifications: BTreeMap<RiskFactor, String>,
    /// Recommended action per risk factor.
    pub strategies: BTreeMap<RiskFactor, String>,
    /// The raw external-context payload used during adjustment.
    pub context: SecretRiskContext,
}

impl SecretRiskEvaluation {
    /// The worst level across all factors.
    #[must_use]
    pub fn max_level(&self) -> RiskLevel {
        self.levels.values().copied().max().unwrap_or_default()
    }
}

/// Evaluates secrets through the four-stage risk pipeline.
pub struct SecretRiskEvaluator {
    sensitivity: Arc<dyn SensitivityClassifier>,
    heightened: Arc<dyn HeightenedRiskClassifier>,
    mitigation: Arc<dyn MitigationClassifier>,
    strategies: MitigationStrategyTable,
    reference_date: Option<NaiveDate>,
}

impl SecretRiskEvaluator {
    /// Create a new evaluator with the default strategy table.
    pub fn new(
        sensitivity: Arc<dyn SensitivityClassifier>,
        heightened: Arc<dyn HeightenedRiskClassifier>,
        mitigation: Arc<dyn MitigationClassifier>,
    ) -> Self {
        Self {
            sensitivity,
            heightened,
            mitigation,
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

    /// Evaluate one secret record.
    pub async fn evaluate_record(&self, secret: &Secret) -> Result<SecretRiskEvaluation> {
        let today = self.today();

        // BASE
        let base = estimator::base_persistent_access_risk(
            estimator::days_until_rotation(secret, today),
            estimator::days_since_last_access(secret, today),
        );
        let initial: RiskFactorLevels =
            BTreeMap::from([(RiskFactor::PersistentAccessRisk, base)]);

        // INFLUENCED
        let criticality = estimator::service_criticality(&secret.service);
        let sensitivity = self
            .sensitivity
            .classify_sensitivity(&secret.description)
            .await;
        let influenced = adjust::apply_influencers(&initial, criticality, sensitivity);

        // CONTEXTUALIZED
        let context = SecretRiskContext {
            external_mitigation: self.mitigation.classify_mitigation(secret).await,
            heightened_risks: self.heightened.classify_heightened_risks(secret).await,
        };
        let levels = adjust::apply_external_context(
            &influenced,
            context.external_mitigation,
            &context.heightened_risks,
        );

        // JUSTIFIED
        let mut justifications = BTreeMap::new();
        let mut strategies = BTreeMap::new();
        for (factor, level) in &levels {
            let initial_level = initial.get(factor).copied().unwrap_or_default();
            justifications.insert(
                *factor,
                justify::compose(
                    *factor,
                    initial_level,
                    *level,
                    secret,
                    today,
                    criticality,
                    sensitivity,
                    context.external_mitigation,
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

        Ok(SecretRiskEvaluation {
            levels,
            justifications,
            strategies,
            context,
        })
    }
}
