//! File-transfer risk domain.
//!
//! Scores the risk that a departing employee's file transfers and accesses
//! amount to data exfiltration or unauthorized sharing: a base estimate from
//! recency, size, destination and sharing status, static adjustments for
//! data sensitivity and activity type, externally sourced heightened-risk
//! signals, and a deterministic justification per factor.

pub mod adjust;
pub mod classify;
pub mod estimator;
pub mod evaluator;
pub mod justify;
pub mod vocabulary;

pub use adjust::RiskFactorLevels;
pub use classify::{
    all_low_heightened_risks, HeightenedRiskClassifier, SensitivityClassifier,
    StaticTransferClassifier, TransferRiskContext,
};
pub use evaluator::{TransferRiskEvaluation, TransferRiskEvaluator};
pub use vocabulary::{MitigationStrategyTable, RiskFactor, RiskInfluencer, RiskLevel};
