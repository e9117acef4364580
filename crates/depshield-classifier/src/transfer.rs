//! AI-backed classifiers for the file-transfer domain.
//!
//! Sensitivity runs against the plain chat model; heightened risks run
//! against the web-search-augmented research model. There is no mitigation
//! assessment for transfers.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use depshield_risk::transfer::{
    all_low_heightened_risks, HeightenedRiskClassifier, RiskInfluencer, RiskLevel,
    SensitivityClassifier,
};
use depshield_risk::types::FileTransfer;

use crate::client::ChatClient;
use crate::config::ClassifierConfig;
use crate::ClassifierError;

/// Classifier suite for file transfers.
#[derive(Debug, Clone)]
pub struct AiTransferClassifier {
    chat: ChatClient,
    research: ChatClient,
}

impl AiTransferClassifier {
    /// Build the classifier suite from configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        Ok(Self {
            chat: ChatClient::new(config.chat.clone(), config.timeout_secs)?,
            research: ChatClient::new(config.research.clone(), config.timeout_secs)?,
        })
    }

    async fn assess_sensitivity(&self, description: &str) -> Result<RiskLevel, ClassifierError> {
        let prompt = sensitivity_prompt(description);
        let value = self.chat.complete_json(&prompt).await?;
        value
            .get("risk_level")
            .and_then(Value::as_str)
            .and_then(RiskLevel::from_label)
            .ok_or_else(|| ClassifierError::Malformed {
                detail: "sensitivity assessment carried no usable risk_level".to_string(),
            })
    }

    async fn assess_heightened_risks(
        &self,
        transfer: &FileTransfer,
    ) -> Result<BTreeMap<RiskInfluencer, RiskLevel>, ClassifierError> {
        let prompt = heightened_risk_prompt(transfer);
        let value = self.research.complete_json(&prompt).await?;
        Ok(parse_heightened_risks(&value))
    }
}

#[async_trait]
impl SensitivityClassifier for AiTransferClassifier {
    async fn classify_sensitivity(&self, description: &str) -> RiskLevel {
        match self.assess_sensitivity(description).await {
            Ok(level) => level,
            Err(error) => {
                warn!(%error, "sensitivity classification failed, defaulting to MEDIUM");
                RiskLevel::Medium
            }
        }
    }
}

#[async_trait]
impl HeightenedRiskClassifier for AiTransferClassifier {
    async fn classify_heightened_risks(
        &self,
        transfer: &FileTransfer,
    ) -> BTreeMap<RiskInfluencer, RiskLevel> {
        match self.assess_heightened_risks(transfer).await {
            Ok(risks) => risks,
            Err(error) => {
                warn!(%error, "heightened-risk classification failed, defaulting to all-LOW");
                all_low_heightened_risks()
            }
        }
    }
}

fn sensitivity_prompt(description: &str) -> String {
    format!(
        r#"Analyze the following description of a file or data transfer and assess its data sensitivity level.
Consider factors such as the type of data, potential impact if exposed, and regulatory implications.

Description: "{description}"

Provide your assessment as a JSON object with the following structure:
{{
    "risk_level": "LOW" | "MEDIUM" | "HIGH",
    "explanation": "Brief explanation for the assessment"
}}

Base your assessment on these guidelines:
- HIGH: Highly sensitive data (e.g., financial reports, product roadmaps, customer personal information)
- MEDIUM: Moderately sensitive data (e.g., internal business processes, project plans)
- LOW: Low sensitivity data (e.g., public information, general communications)

Respond only with the JSON object, no additional text."#
    )
}

fn heightened_risk_prompt(transfer: &FileTransfer) -> String {
    format!(
        r#"Analyze the following file transfer activity for potential heightened risks:
Activity Type: {activity_type}
File Description: {description}
Source: {source}
Destination: {destination}
Size: {size_mb} MB
Sharing Status: {sharing_status}

Consider the following risk vectors:
1. Data Exfiltration
2. Unauthorized Sharing
3. Sensitive Information Exposure
4. Compliance Violation
5. Intellectual Property Loss

For each risk vector, assess the risk level as LOW, MEDIUM, or HIGH.
Respond with a JSON object in the following format:
{{
    "data_exfiltration": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "unauthorized_sharing": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "sensitive_information_exposure": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "compliance_violation": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "intellectual_property_loss": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }}
}}"#,
        activity_type = transfer.activity_type,
        description = transfer.description,
        source = transfer.location.source,
        destination = transfer.location.destination,
        size_mb = transfer.size_mb,
        sharing_status = transfer.sharing_status,
    )
}

/// Build the total influencer mapping from a response object.
fn parse_heightened_risks(value: &Value) -> BTreeMap<RiskInfluencer, RiskLevel> {
    RiskInfluencer::ALL
        .into_iter()
        .map(|influencer| {
            let key = influencer.to_string().to_lowercase();
            let level = value
                .get(&key)
                .and_then(|entry| entry.get("level"))
                .and_then(Value::as_str)
                .and_then(RiskLevel::from_label)
                .unwrap_or(RiskLevel::Low);
            (influencer, level)
        })
        .collect()
}
