//! Error types for the departure-risk engine.

use thiserror::Error;

use crate::types::EmployeeId;

/// Errors that can occur during departure-risk evaluation.
#[derive(Debug, Error)]
pub enum RiskError {
    /// The employee has no records in the store.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// A (factor, level) pair is missing from the mitigation-strategy table.
    ///
    /// This is a contract violation: the default tables are total over every
    /// factor the pipeline can produce, so this only fires with a custom
    /// partial table.
    #[error("No mitigation strategy defined for {factor} at level {level}")]
    MissingStrategy { factor: String, level: String },

    /// The record store could not be read or decoded.
    #[error("Record store error: {detail}")]
    Store { detail: String },
}

/// Convenience Result type for the departure-risk engine.
pub type Result<T> = std::result::Result<T, RiskError>;
