//! AI-backed classifiers for the secret domain.
//!
//! Sensitivity runs against the plain chat model; mitigation and heightened
//! risks run against the web-search-augmented research model. Every failure
//! path collapses into the documented defaults so the engine never sees a
//! classifier error.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use depshield_risk::secret::{
    all_low_heightened_risks, HeightenedRiskClassifier, MitigationClassifier, MitigationStatus,
    RiskInfluencer, RiskLevel, SensitivityClassifier,
};
use depshield_risk::types::Secret;

use crate::client::ChatClient;
use crate::config::ClassifierConfig;
use crate::ClassifierError;

/// Classifier suite for secrets.
#[derive(Debug, Clone)]
pub struct AiSecretClassifier {
    chat: ChatClient,
    research: ChatClient,
}

impl AiSecretClassifier {
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

    async fn assess_mitigation(&self, secret: &Secret) -> Result<MitigationStatus, ClassifierError> {
        let prompt = mitigation_prompt(secret);
        let value = self.research.complete_json(&prompt).await?;
        let status = value
            .get("mitigation_status")
            .and_then(Value::as_str)
            .map(parse_mitigation_label)
            .ok_or_else(|| ClassifierError::Malformed {
                detail: "mitigation assessment carried no usable mitigation_status".to_string(),
            })?;
        Ok(status)
    }

    async fn assess_heightened_risks(
        &self,
        secret: &Secret,
    ) -> Result<BTreeMap<RiskInfluencer, RiskLevel>, ClassifierError> {
        let prompt = heightened_risk_prompt(secret);
        let value = self.research.complete_json(&prompt).await?;
        Ok(parse_heightened_risks(&value))
    }
}

#[async_trait]
impl SensitivityClassifier for AiSecretClassifier {
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
impl HeightenedRiskClassifier for AiSecretClassifier {
    async fn classify_heightened_risks(
        &self,
        secret: &Secret,
    ) -> BTreeMap<RiskInfluencer, RiskLevel> {
        match self.assess_heightened_risks(secret).await {
            Ok(risks) => risks,
            Err(error) => {
                warn!(%error, "heightened-risk classification failed, defaulting to all-LOW");
                all_low_heightened_risks()
            }
        }
    }
}

#[async_trait]
impl MitigationClassifier for AiSecretClassifier {
    async fn classify_mitigation(&self, secret: &Secret) -> MitigationStatus {
        match self.assess_mitigation(secret).await {
            Ok(status) => status,
            Err(error) => {
                warn!(%error, "mitigation classification failed, defaulting to ABSENT");
                MitigationStatus::Absent
            }
        }
    }
}

fn sensitivity_prompt(description: &str) -> String {
    format!(
        r#"Analyze the following description of a secret or sensitive information and assess its data sensitivity level.
Consider factors such as the type of data, potential impact if exposed, and regulatory implications.

Description: "{description}"

Provide your assessment as a JSON object with the following structure:
{{
    "risk_level": "LOW" | "MEDIUM" | "HIGH",
    "explanation": "Brief explanation for the assessment"
}}

Base your assessment on these guidelines:
- HIGH: Highly sensitive data (e.g., customer personal information, payment details, trade secrets)
- MEDIUM: Moderately sensitive data (e.g., internal business processes, proprietary but non-critical information)
- LOW: Low sensitivity data (e.g., publicly available information, non-confidential internal data)

Respond only with the JSON object, no additional text."#
    )
}

fn mitigation_prompt(secret: &Secret) -> String {
    format!(
        r#"Analyze the following secret and service for external mitigation measures:
Secret Description: {description}
Service: {service}

Considering industry-standard security practices, assess whether this service likely has
external mitigation measures in place to protect against unauthorized access or misuse
of this secret. Respond with a JSON object in the following format:
{{
    "mitigation_status": "PRESENT" | "PARTIAL" | "ABSENT",
    "explanation": "Brief explanation for the assessment"
}}"#,
        description = secret.description,
        service = secret.service,
    )
}

fn heightened_risk_prompt(secret: &Secret) -> String {
    format!(
        r#"Analyze the following secret and service for potential heightened risks:
Secret Description: {description}
Service: {service}

Consider the following risk vectors:
1. Data Exfiltration
2. Unauthorized Access
3. System Compromise
4. Compliance Violation
5. Intellectual Property Theft

For each risk vector, assess the risk level as LOW, MEDIUM, or HIGH.
Respond with a JSON object in the following format:
{{
    "data_exfiltration": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "unauthorized_access": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "system_compromise": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "compliance_violation": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }},
    "intellectual_property_theft": {{ "level": "LOW" | "MEDIUM" | "HIGH", "explanation": "Brief explanation" }}
}}"#,
        description = secret.description,
        service = secret.service,
    )
}

fn parse_mitigation_label(label: &str) -> MitigationStatus {
    match label.trim().to_uppercase().as_str() {
        "PRESENT" => MitigationStatus::Present,
        "PARTIAL" => MitigationStatus::Partial,
        _ => MitigationStatus::Absent,
    }
}

/// Build the total influencer mapping from a response object.
///
/// Vectors the response does not mention, or mentions with an unknown label,
/// resolve to Low.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mitigation_labels() {
        assert_eq!(parse_mitigation_label("PRESENT"), MitigationStatus::Present);
        assert_eq!(parse_mitigation_label("partial"), MitigationStatus::Partial);
        assert_eq!(parse_mitigation_label("ABSENT"), MitigationStatus::Absent);
        assert_eq!(parse_mitigation_label("unknown"), MitigationStatus::Absent);
    }

    #[test]
    fn test_parse_heightened_risks_is_total() {
        let value = json!({
            "system_compromise": { "level": "HIGH", "explanation": "exposed endpoint" },
            "compliance_violation": { "level": "MEDIUM", "explanation": "regulated data" }
        });
        let risks = parse_heightened_risks(&value);
        assert_eq!(risks.len(), RiskInfluencer::ALL.len());
        assert_eq!(risks[&RiskInfluencer::SystemCompromise], RiskLevel::High);
        assert_eq!(
            risks[&RiskInfluencer::ComplianceViolation],
            RiskLevel::Medium
        );
        // Unmentioned vectors default to Low.
        assert_eq!(risks[&RiskInfluencer::DataExfiltration], RiskLevel::Low);
    }

    #[test]
    fn test_parse_heightened_risks_unknown_label_defaults_low() {
        let value = json!({
            "system_compromise": { "level": "SEVERE", "explanation": "bad label" }
        });
        let risks = parse_heightened_risks(&value);
        assert_eq!(risks[&RiskInfluencer::SystemCompromise], RiskLevel::Low);
    }

    #[test]
    fn test_sensitivity_prompt_embeds_description() {
        let prompt = sensitivity_prompt("Customer payment tokens");
        assert!(prompt.contains("Customer payment tokens"));
        assert!(prompt.contains("\"risk_level\""));
    }
}
