//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine-level failure (not-found, store, contract violation).
    #[error(transparent)]
    Risk(#[from] depshield_risk::RiskError),

    /// Classifier configuration failure.
    #[error(transparent)]
    Classifier(#[from] depshield_classifier::ClassifierError),

    /// Filesystem failure while writing output.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding failure.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
