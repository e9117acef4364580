//! Secret-exposure risk domain.
//!
//! Scores the risk that a departing employee's access to credentials and
//! secrets outlives their departure: a base estimate from rotation and
//! access recency, static adjustments for service criticality and data
//! sensitivity, externally sourced heightened-risk signals and mitigation
//! status, and a deterministic justification per factor.

pub mod adjust;
pub mod classify;
pub mod estimator;
pub mod evaluator;
pub mod justify;
pub mod vocabulary;

pub use adjust::RiskFactorLevels;
pub use classify::{
    all_low_heightened_risks, HeightenedRiskClassifier, MitigationClassifier, SecretRiskContext,
    SensitivityClassifier, StaticSecretClassifier,
};
pub use evaluator::{SecretRiskEvaluation, SecretRiskEvaluator};
pub use vocabulary::{
    MitigationStatus, MitigationStrategyTable, RiskFactor, RiskInfluencer, RiskLevel,
};
