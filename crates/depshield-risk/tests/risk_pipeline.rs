//! End-to-end pipeline behavior for single records: base heuristics through
//! adjustment and justification, exercised with deterministic stub
//! classifiers.

mod common;

use std::sync::Arc;

use common::fixtures;
use depshield_risk::secret::{
    self, SecretRiskEvaluator, StaticSecretClassifier,
};
use depshield_risk::transfer::{
    self, StaticTransferClassifier, TransferRiskEvaluator,
};

fn secret_evaluator(classifier: StaticSecretClassifier) -> SecretRiskEvaluator {
    let classifier = Arc::new(classifier);
    SecretRiskEvaluator::new(classifier.clone(), classifier.clone(), classifier)
        .with_reference_date(fixtures::reference_date())
}

fn transfer_evaluator(classifier: StaticTransferClassifier) -> TransferRiskEvaluator {
    let classifier = Arc::new(classifier);
    TransferRiskEvaluator::new(classifier.clone(), classifier)
        .with_reference_date(fixtures::reference_date())
}

#[tokio::test]
async fn recently_used_long_lived_secret_scores_high() {
    // Accessed 3 days ago, rotation 120 days out: base High. "prod-db" does
    // not contain "production", so criticality is Medium and no demotion
    // applies; the default Medium sensitivity cannot promote past High.
    let evaluation = secret_evaluator(StaticSecretClassifier::new())
        .evaluate_record(&fixtures::secret(
            "sec-a",
            "prod-db",
            "2026-01-29",
            Some("2026-06-01"),
        ))
        .await
        .unwrap();

    assert_eq!(
        evaluation.levels[&secret::RiskFactor::PersistentAccessRisk],
        secret::RiskLevel::High
    );
    let justification = &evaluation.justifications[&secret::RiskFactor::PersistentAccessRisk];
    assert!(justification.contains("last accessed 3 days ago"));
    assert!(justification.contains("due for rotation in 120 days"));
}

#[tokio::test]
async fn unscheduled_rotation_keeps_medium_branch_alive() {
    // No rotation scheduled resolves to the 1825-day sentinel, which alone
    // satisfies the Medium rotation-distance condition even for a secret
    // untouched for 200 days.
    let evaluation = secret_evaluator(StaticSecretClassifier::new().with_sensitivity(
        secret::RiskLevel::Low,
    ))
    .evaluate_record(&fixtures::secret("sec-b", "wiki", "2025-07-16", None))
    .await
    .unwrap();

    assert_eq!(
        evaluation.levels[&secret::RiskFactor::PersistentAccessRisk],
        secret::RiskLevel::Medium
    );
    assert!(
        evaluation.justifications[&secret::RiskFactor::PersistentAccessRisk]
            .contains("is not scheduled for rotation.")
    );
}

#[tokio::test]
async fn recent_transfer_to_personal_destination_scores_high() {
    // 2 days old, 5 MB, destination contains "personal": the first clause
    // fires on recency + destination, independent of the sharing status.
    let evaluation = transfer_evaluator(
        StaticTransferClassifier::new().with_sensitivity(transfer::RiskLevel::Low),
    )
    .evaluate_record(&fixtures::file_transfer(
        "act-a",
        "File Download",
        "2026-01-30T10:00:00Z",
        5.0,
        "personal-drive",
        "internal",
    ))
    .await
    .unwrap();

    assert_eq!(
        evaluation.levels[&transfer::RiskFactor::DataExfiltration],
        transfer::RiskLevel::High
    );
}

#[tokio::test]
async fn external_sharing_scores_high_regardless_of_age_and_size() {
    let evaluation = transfer_evaluator(
        StaticTransferClassifier::new().with_sensitivity(transfer::RiskLevel::Low),
    )
    .evaluate_record(&fixtures::file_transfer(
        "act-b",
        "File Download",
        "2025-01-15T10:00:00Z",
        0.5,
        "corp-archive",
        "shared externally",
    ))
    .await
    .unwrap();

    assert_eq!(
        evaluation.levels[&transfer::RiskFactor::DataExfiltration],
        transfer::RiskLevel::High
    );
}

#[tokio::test]
async fn adjusters_keep_levels_in_bounds_for_every_stub_combination() {
    for sensitivity in [
        secret::RiskLevel::Low,
        secret::RiskLevel::Medium,
        secret::RiskLevel::High,
    ] {
        for mitigation in [
            secret::MitigationStatus::Present,
            secret::MitigationStatus::Partial,
            secret::MitigationStatus::Absent,
        ] {
            let evaluation = secret_evaluator(
                StaticSecretClassifier::new()
                    .with_sensitivity(sensitivity)
                    .with_mitigation(mitigation)
                    .with_heightened_risk(
                        secret::RiskInfluencer::SystemCompromise,
                        secret::RiskLevel::High,
                    ),
            )
            .evaluate_record(&fixtures::high_risk_secret("sec-c"))
            .await
            .unwrap();

            for level in evaluation.levels.values() {
                assert!(*level >= secret::RiskLevel::Low && *level <= secret::RiskLevel::High);
            }
        }
    }
}

#[tokio::test]
async fn mitigation_present_never_raises_any_factor() {
    for record in [
        fixtures::high_risk_secret("sec-d"),
        fixtures::low_base_secret("sec-e"),
    ] {
        let unmitigated = secret_evaluator(StaticSecretClassifier::new())
            .evaluate_record(&record)
            .await
            .unwrap();
        let mitigated = secret_evaluator(
            StaticSecretClassifier::new().with_mitigation(secret::MitigationStatus::Present),
        )
        .evaluate_record(&record)
        .await
        .unwrap();

        for (factor, level) in &mitigated.levels {
            assert!(level <= &unmitigated.levels[factor]);
        }
    }
}

#[tokio::test]
async fn heightened_influencers_never_lower_established_levels() {
    let baseline = transfer_evaluator(StaticTransferClassifier::new())
        .evaluate_record(&fixtures::file_transfer(
            "act-c",
            "Bulk Transfer",
            "2026-01-30T10:00:00Z",
            150.0,
            "personal-usb",
            "restricted",
        ))
        .await
        .unwrap();

    let heightened = transfer_evaluator(
        StaticTransferClassifier::new()
            .with_heightened_risk(transfer::RiskInfluencer::DataExfiltration, transfer::RiskLevel::High)
            .with_heightened_risk(transfer::RiskInfluencer::ComplianceViolation, transfer::RiskLevel::High),
    )
    .evaluate_record(&fixtures::file_transfer(
        "act-c",
        "Bulk Transfer",
        "2026-01-30T10:00:00Z",
        150.0,
        "personal-usb",
        "restricted",
    ))
    .await
    .unwrap();

    for (factor, level) in &baseline.levels {
        assert!(heightened.levels[factor] >= *level);
    }
}

#[tokio::test]
async fn identical_inputs_produce_identical_evaluations() {
    let record = fixtures::file_transfer(
        "act-d",
        "Data Export",
        "2026-01-28T10:00:00Z",
        42.0,
        "partner-portal",
        "restricted",
    );
    let classifier = StaticTransferClassifier::new().with_heightened_risk(
        transfer::RiskInfluencer::IntellectualPropertyLoss,
        transfer::RiskLevel::High,
    );

    let first = transfer_evaluator(classifier.clone())
        .evaluate_record(&record)
        .await
        .unwrap();
    let second = transfer_evaluator(classifier)
        .evaluate_record(&record)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.justifications, second.justifications);
}

#[tokio::test]
async fn evaluation_levels_round_trip_as_names() {
    let evaluation = secret_evaluator(StaticSecretClassifier::new())
        .evaluate_record(&fixtures::high_risk_secret("sec-f"))
        .await
        .unwrap();

    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(
        json["levels"]["PERSISTENT_ACCESS_RISK"],
        serde_json::json!("HIGH")
    );

    let back: depshield_risk::secret::SecretRiskEvaluation =
        serde_json::from_value(json).unwrap();
    assert_eq!(back.levels, evaluation.levels);
}
