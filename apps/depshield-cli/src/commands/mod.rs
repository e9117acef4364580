//! CLI command implementations.

pub mod batch;
pub mod evaluate;

use std::path::Path;
use std::sync::Arc;

use depshield_classifier::{AiSecretClassifier, AiTransferClassifier, ClassifierConfig};
use depshield_risk::aggregate::DepartureRiskService;
use depshield_risk::secret::{SecretRiskEvaluator, StaticSecretClassifier};
use depshield_risk::store::JsonFileStore;
use depshield_risk::transfer::{StaticTransferClassifier, TransferRiskEvaluator};

use crate::error::CliResult;

/// Wire the departure-risk service over the metadata documents in `data_dir`.
///
/// With `offline` set, the AI classifiers are replaced by deterministic
/// stubs reporting the documented safe defaults; no network access happens.
pub fn build_service(data_dir: &Path, offline: bool) -> CliResult<DepartureRiskService> {
    let store = Arc::new(JsonFileStore::open(
        data_dir.join("secret_metadata.json"),
        data_dir.join("file_transfer_metadata.json"),
    )?);

    let (secret_evaluator, transfer_evaluator) = if offline {
        let secrets = Arc::new(StaticSecretClassifier::new());
        let transfers = Arc::new(StaticTransferClassifier::new());
        (
            SecretRiskEvaluator::new(secrets.clone(), secrets.clone(), secrets),
            TransferRiskEvaluator::new(transfers.clone(), transfers),
        )
    } else {
        let config = ClassifierConfig::from_env()?;
        let secrets = Arc::new(AiSecretClassifier::new(&config)?);
        let transfers = Arc::new(AiTransferClassifier::new(&config)?);
        (
            SecretRiskEvaluator::new(secrets.clone(), secrets.clone(), secrets),
            TransferRiskEvaluator::new(transfers.clone(), transfers),
        )
    };

    Ok(DepartureRiskService::new(
        store,
        secret_evaluator,
        transfer_evaluator,
    ))
}
