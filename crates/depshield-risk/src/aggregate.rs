//! Aggregation across an employee's records and the cross-domain combiner.
//!
//! Each record is bucketed by the worst level in its factor mapping; the
//! combiner compares the two domains' bucket populations and produces one
//! overall verdict per employee.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RiskError};
use crate::secret::{
    self, SecretRiskContext, SecretRiskEvaluation, SecretRiskEvaluator,
};
use crate::store::EmployeeRecordStore;
use crate::transfer::{
    self, TransferRiskContext, TransferRiskEvaluation, TransferRiskEvaluator,
};
use crate::types::{ActivityId, EmployeeId, FileTransfer, Secret, SecretId};

/// Overall departure verdict across both domains.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallRiskLevel {
    /// Neither domain rose above Low.
    Low,
    /// At least one domain peaked at Medium.
    Medium,
    /// At least one domain peaked at High.
    High,
}

impl fmt::Display for OverallRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Bucketed summary of one secret record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRiskSummary {
    /// Record identity.
    pub secret_id: SecretId,
    /// Display name of the secret.
    pub name: String,
    /// Description of what the secret protects.
    pub description: String,
    /// Final level per risk factor.
    pub risk_factors: BTreeMap<secret::RiskFactor, secret::RiskLevel>,
    /// Deterministic explanation per risk factor.
    pub justifications: BTreeMap<secret::RiskFactor, String>,
    /// Recommended action per risk factor.
    pub mitigation_strategies: BTreeMap<secret::RiskFactor, String>,
    /// The raw external-context payload used.
    pub additional_context: SecretRiskContext,
}

impl SecretRiskSummary {
    fn from_evaluation(record: &Secret, evaluation: SecretRiskEvaluation) -> Self {
        Self {
            secret_id: record.secret_id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            risk_factors: evaluation.levels,
            justifications: evaluation.justifications,
            mitigation_strategies: evaluation.strategies,
            additional_context: evaluation.context,
        }
    }
}

/// Bucketed summary of one file-transfer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRiskSummary {
    /// Record identity.
    pub activity_id: ActivityId,
    /// Display name of the file or activity.
    pub name: String,
    /// Description of the transferred data.
    pub description: String,
    /// Final level per risk factor.
    pub risk_factors: BTreeMap<transfer::RiskFactor, transfer::RiskLevel>,
    /// Deterministic explanation per risk factor.
    pub justifications: BTreeMap<transfer::RiskFactor, String>,
    /// Recommended action per risk factor.
    pub mitigation_strategies: BTreeMap<transfer::RiskFactor, String>,
    /// The raw external-context payload used.
    pub additional_context: TransferRiskContext,
}

impl TransferRiskSummary {
    fn from_evaluation(record: &FileTransfer, evaluation: TransferRiskEvaluation) -> Self {
        Self {
            activity_id: record.activity_id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            risk_factors: evaluation.levels,
            justifications: evaluation.justifications,
            mitigation_strategies: evaluation.strategies,
            additional_context: evaluation.context,
        }
    }
}

/// Secret records grouped by their worst factor level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretRiskBuckets {
    /// Records whose worst factor is Low.
    pub low: Vec<SecretRiskSummary>,
    /// Records whose worst factor is Medium.
    pub medium: Vec<SecretRiskSummary>,
    /// Records whose worst factor is High.
    pub high: Vec<SecretRiskSummary>,
}

impl SecretRiskBuckets {
    fn push(&mut self, level: secret::RiskLevel, summary: SecretRiskSummary) {
        match level {
            secret::RiskLevel::Low => self.low.push(summary),
            secret::RiskLevel::Medium => self.medium.push(summary),
            secret::RiskLevel::High => self.high.push(summary),
        }
    }

    /// The level whose bucket holds the most records.
    ///
    /// Buckets are scanned Low, Medium, High and the first maximal count
    /// wins, so ties resolve to the lower level.
    #[must_use]
    pub fn dominant_level(&self) -> secret::RiskLevel {
        let mut best = (secret::RiskLevel::Low, self.low.len());
        for (level, count) in [
            (secret::RiskLevel::Medium, self.medium.len()),
            (secret::RiskLevel::High, self.high.len()),
        ] {
            if count > best.1 {
                best = (level, count);
            }
        }
        best.0
    }

    /// Total records across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }
}

/// File-transfer records grouped by their worst factor level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRiskBuckets {
    /// Records whose worst factor is Low.
    pub low: Vec<TransferRiskSummary>,
    /// Records whose worst factor is Medium.
    pub medium: Vec<TransferRiskSummary>,
    /// Records whose worst factor is High.
    pub high: Vec<TransferRiskSummary>,
}

impl TransferRiskBuckets {
    fn push(&mut self, level: transfer::RiskLevel, summary: TransferRiskSummary) {
        match level {
            transfer::RiskLevel::Low => self.low.push(summary),
            transfer::RiskLevel::Medium => self.medium.push(summary),
            transfer::RiskLevel::High => self.high.push(summary),
        }
    }

    /// The level whose bucket holds the most records.
    ///
    /// Buckets are scanned Low, Medium, High and the first maximal count
    /// wins, so ties resolve to the lower level.
    #[must_use]
    pub fn dominant_level(&self) -> transfer::RiskLevel {
        let mut best = (transfer::RiskLevel::Low, self.low.len());
        for (level, count) in [
            (transfer::RiskLevel::Medium, self.medium.len()),
            (transfer::RiskLevel::High, self.high.len()),
        ] {
            if count > best.1 {
                best = (level, count);
            }
        }
        best.0
    }

    /// Total records across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }
}

/// The combined per-employee verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureRiskAssessment {
    /// The employee assessed.
    pub user_id: EmployeeId,
    /// Bucketed secret-risk results.
    pub secret_risk: SecretRiskBuckets,
    /// Bucketed file-transfer-risk results.
    pub file_transfer_risk: TransferRiskBuckets,
    /// Merged verdict across both domains.
    pub overall_risk_level: OverallRiskLevel,
}

/// Merge the two domains' dominant levels into one verdict.
#[must_use]
pub fn combine_domain_levels(
    secret_level: secret::RiskLevel,
    transfer_level: transfer::RiskLevel,
) -> OverallRiskLevel {
    if secret_level == secret::RiskLevel::High || transfer_level == transfer::RiskLevel::High {
        OverallRiskLevel::High
    } else if secret_level == secret::RiskLevel::Medium
        || transfer_level == transfer::RiskLevel::Medium
    {
        OverallRiskLevel::Medium
    } else {
        OverallRiskLevel::Low
    }
}

/// Runs both domain evaluators over an employee's records and combines the
/// results.
pub struct DepartureRiskService {
    store: Arc<dyn EmployeeRecordStore>,
    secrets: SecretRiskEvaluator,
    transfers: TransferRiskEvaluator,
}

impl DepartureRiskService {
    /// Create a new service.
    pub fn new(
        store: Arc<dyn EmployeeRecordStore>,
        secrets: SecretRiskEvaluator,
        transfers: TransferRiskEvaluator,
    ) -> Self {
        Self {
            store,
            secrets,
            transfers,
        }
    }

    /// Evaluate all of an employee's secrets, bucketed by worst level.
    pub async fn evaluate_employee_secrets(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<SecretRiskBuckets> {
        let records = self
            .store
            .load_secrets(employee_id)
            .await?
            .ok_or_else(|| RiskError::EmployeeNotFound(employee_id.clone()))?;

        let mut buckets = SecretRiskBuckets::default();
        for record in &records {
            let evaluation = self.secrets.evaluate_record(record).await?;
            let level = evaluation.max_level();
            buckets.push(level, SecretRiskSummary::from_evaluation(record, evaluation));
        }
        Ok(buckets)
    }

    /// Evaluate all of an employee's file transfers, bucketed by worst level.
    pub async fn evaluate_employee_transfers(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<TransferRiskBuckets> {
        let records = self
            .store
            .load_transfers(employee_id)
            .await?
            .ok_or_else(|| RiskError::EmployeeNotFound(employee_id.clone()))?;

        let mut buckets = TransferRiskBuckets::default();
        for record in &records {
            let evaluation = self.transfers.evaluate_record(record).await?;
            let level = evaluation.max_level();
            buckets.push(
                level,
                TransferRiskSummary::from_evaluation(record, evaluation),
            );
        }
        Ok(buckets)
    }

    /// Evaluate both domains and merge them into one verdict.
    pub async fn evaluate_departure(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<DepartureRiskAssessment> {
        let secret_risk = self.evaluate_employee_secrets(employee_id).await?;
        let file_transfer_risk = self.evaluate_employee_transfers(employee_id).await?;

        let overall_risk_level = combine_domain_levels(
            secret_risk.dominant_level(),
            file_transfer_risk.dominant_level(),
        );

        Ok(DepartureRiskAssessment {
            user_id: employee_id.clone(),
            secret_risk,
            file_transfer_risk,
            overall_risk_level,
        })
    }
}
