//! Record builders and service wiring for integration tests.
//!
//! All dates are relative to the pinned reference date so evaluations stay
//! deterministic regardless of when the suite runs.

use chrono::NaiveDate;
use std::sync::Arc;

use depshield_risk::aggregate::DepartureRiskService;
use depshield_risk::secret::{SecretRiskEvaluator, StaticSecretClassifier};
use depshield_risk::store::InMemoryEmployeeStore;
use depshield_risk::transfer::{StaticTransferClassifier, TransferRiskEvaluator};
use depshield_risk::types::{
    ActivityId, FileTransfer, Secret, SecretId, TransferLocation,
};

/// The date all test evaluations are pinned to.
pub fn reference_date() -> NaiveDate {
    "2026-02-01".parse().unwrap()
}

/// A secret with the given access and rotation dates.
pub fn secret(
    id: &str,
    service: &str,
    last_accessed: &str,
    next_rotation: Option<&str>,
) -> Secret {
    Secret {
        secret_id: SecretId::new(id),
        name: format!("{id}-key"),
        service: service.to_string(),
        description: "Service credentials".to_string(),
        last_accessed: last_accessed.parse().unwrap(),
        next_rotation_date: next_rotation.map(|d| d.parse().unwrap()),
    }
}

/// A secret scoring High at the base stage: recently used, distant rotation.
pub fn high_risk_secret(id: &str) -> Secret {
    secret(id, "prod-db", "2026-01-29", Some("2026-06-01"))
}

/// A secret scoring Low at the base stage: stale and rotating soon.
/// The default Medium sensitivity promotes it to Medium.
pub fn low_base_secret(id: &str) -> Secret {
    secret(id, "wiki", "2025-06-01", Some("2026-02-10"))
}

/// A file transfer with the given shape.
pub fn file_transfer(
    id: &str,
    activity_type: &str,
    timestamp: &str,
    size_mb: f64,
    destination: &str,
    sharing_status: &str,
) -> FileTransfer {
    FileTransfer {
        activity_id: ActivityId::new(id),
        name: format!("{id}.zip"),
        activity_type: activity_type.to_string(),
        description: "Project files".to_string(),
        timestamp: timestamp.parse().unwrap(),
        size_mb,
        location: TransferLocation {
            source: "corp-share".to_string(),
            destination: destination.to_string(),
        },
        sharing_status: sharing_status.to_string(),
    }
}

/// Wire a service over the given store with the given stub classifiers.
pub fn service(
    store: Arc<InMemoryEmployeeStore>,
    secret_classifier: StaticSecretClassifier,
    transfer_classifier: StaticTransferClassifier,
) -> DepartureRiskService {
    let secret_classifier = Arc::new(secret_classifier);
    let transfer_classifier = Arc::new(transfer_classifier);
    DepartureRiskService::new(
        store,
        SecretRiskEvaluator::new(
            secret_classifier.clone(),
            secret_classifier.clone(),
            secret_classifier,
        )
        .with_reference_date(reference_date()),
        TransferRiskEvaluator::new(transfer_classifier.clone(), transfer_classifier)
            .with_reference_date(reference_date()),
    )
}

/// Wire a service with default stub classifiers.
pub fn default_service(store: Arc<InMemoryEmployeeStore>) -> DepartureRiskService {
    service(
        store,
        StaticSecretClassifier::new(),
        StaticTransferClassifier::new(),
    )
}
