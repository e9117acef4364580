//! Departure-risk scoring engine.
//!
//! This crate estimates the risk that a departing employee will exfiltrate
//! secrets or sensitive files. Two structurally identical pipelines score
//! each record of the two domains:
//!
//! 1. A **base estimate** from observable record fields and fixed thresholds.
//! 2. An **influencer adjustment** from static business rules (service
//!    criticality, data sensitivity, activity type).
//! 3. An **external-context adjustment** from classifier-supplied heightened
//!    risks and mitigation status, clamped to the level bounds.
//! 4. A **justification** rendered deterministically per factor.
//!
//! The aggregator buckets each record by its worst factor level and the
//! combiner merges both domains into one per-employee verdict.
//!
//! # Modules
//!
//! - [`secret`] - the secret-exposure domain pipeline
//! - [`transfer`] - the file-transfer domain pipeline
//! - [`aggregate`] - bucketing, the combiner, and [`DepartureRiskService`]
//! - [`store`] - the employee record store trait and implementations
//! - [`types`] - record snapshots and newtype IDs
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use depshield_risk::aggregate::DepartureRiskService;
//! use depshield_risk::secret::{SecretRiskEvaluator, StaticSecretClassifier};
//! use depshield_risk::store::InMemoryEmployeeStore;
//! use depshield_risk::transfer::{StaticTransferClassifier, TransferRiskEvaluator};
//! use depshield_risk::types::EmployeeId;
//!
//! let store = Arc::new(InMemoryEmployeeStore::new());
//! let secret_classifier = Arc::new(StaticSecretClassifier::new());
//! let transfer_classifier = Arc::new(StaticTransferClassifier::new());
//!
//! let service = DepartureRiskService::new(
//!     store,
//!     SecretRiskEvaluator::new(
//!         secret_classifier.clone(),
//!         secret_classifier.clone(),
//!         secret_classifier,
//!     ),
//!     TransferRiskEvaluator::new(transfer_classifier.clone(), transfer_classifier),
//! );
//! let assessment = service.evaluate_departure(&EmployeeId::new("emp12345")).await?;
//! ```
//!
//! Classifier transport lives behind the capability traits in
//! [`secret::classify`] and [`transfer::classify`]; the engine is fully
//! testable with the deterministic `Static*Classifier` stubs.

pub mod aggregate;
pub mod error;
pub mod secret;
pub mod store;
pub mod transfer;
pub mod types;

// Re-export commonly used types
pub use aggregate::{
    combine_domain_levels, DepartureRiskAssessment, DepartureRiskService, OverallRiskLevel,
    SecretRiskBuckets, SecretRiskSummary, TransferRiskBuckets, TransferRiskSummary,
};
pub use error::{Result, RiskError};
pub use store::{EmployeeRecordStore, InMemoryEmployeeStore, JsonFileStore};
pub use types::{ActivityId, EmployeeId, FileTransfer, Secret, SecretId, TransferLocation};
