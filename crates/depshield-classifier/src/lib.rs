//! AI-backed implementations of the departure-risk classifier traits.
//!
//! This crate provides the transport behind the capability traits the engine
//! consumes: sensitivity classification over a plain chat-completions model,
//! and mitigation/heightened-risk assessment over a web-search-augmented
//! model.
//!
//! Failures never cross the trait boundary. Every transport or parse error
//! is logged and absorbed into the documented defaults: sensitivity falls
//! back to MEDIUM, mitigation to ABSENT, and heightened risks to an all-LOW
//! mapping.
//!
//! # Usage
//!
//! ```rust,ignore
//! use depshield_classifier::{AiSecretClassifier, AiTransferClassifier, ClassifierConfig};
//!
//! let config = ClassifierConfig::from_env()?;
//! let secrets = AiSecretClassifier::new(&config)?;
//! let transfers = AiTransferClassifier::new(&config)?;
//! ```

pub mod client;
pub mod config;
pub mod secret;
pub mod transfer;

// Re-exports
pub use config::{ChatEndpoint, ClassifierConfig};
pub use secret::AiSecretClassifier;
pub use transfer::AiTransferClassifier;

/// Errors internal to the classifier transport.
///
/// These never reach the engine; the trait implementations convert them into
/// the documented default classifications.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The endpoint could not be reached or rejected the request.
    #[error("Classifier endpoint '{endpoint}' unavailable: {detail}")]
    Unavailable { endpoint: String, detail: String },

    /// The response carried no usable JSON object.
    #[error("Malformed classifier response: {detail}")]
    Malformed { detail: String },

    /// Configuration error (missing key, bad timeout).
    #[error("Classifier configuration error: {detail}")]
    Config { detail: String },
}
