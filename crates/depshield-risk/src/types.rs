//! Record types shared by both risk domains.
//!
//! Includes newtype wrappers for record identities and the read-only
//! snapshots the evaluators score. Records are never mutated by the engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types (Newtype Pattern)
// ============================================================================

/// Opaque identifier for an employee (e.g., `emp12345`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    /// Create a new employee ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque identifier for a secret record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretId(pub String);

impl SecretId {
    /// Create a new secret ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SecretId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque identifier for a file-transfer activity record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub String);

impl ActivityId {
    /// Create a new activity ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A credential or secret an employee can reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    /// Unique record identity.
    pub secret_id: SecretId,
    /// Display name of the secret.
    pub name: String,
    /// Service the secret grants access to.
    pub service: String,
    /// Free-text description of what the secret protects.
    pub description: String,
    /// Date the secret was last used.
    pub last_accessed: NaiveDate,
    /// Next scheduled rotation; `None` means no rotation is scheduled.
    #[serde(default)]
    pub next_rotation_date: Option<NaiveDate>,
}

/// Source and destination of a file-transfer activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferLocation {
    /// Where the data came from.
    pub source: String,
    /// Where the data went.
    pub destination: String,
}

/// A file transfer or access activity recorded for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTransfer {
    /// Unique record identity.
    pub activity_id: ActivityId,
    /// Display name of the file or activity.
    pub name: String,
    /// Activity category (e.g., "Bulk Transfer", "File Sharing").
    pub activity_type: String,
    /// Free-text description of the transferred data.
    pub description: String,
    /// When the activity happened.
    pub timestamp: DateTime<Utc>,
    /// Size of the transferred data in megabytes.
    pub size_mb: f64,
    /// Source and destination of the transfer.
    pub location: TransferLocation,
    /// Sharing state of the data (e.g., "internal", "external", "restricted").
    pub sharing_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_display() {
        let id = EmployeeId::new("emp12345");
        assert_eq!(id.to_string(), "emp12345");
        assert_eq!(id.as_str(), "emp12345");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = SecretId::new("sec-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sec-001\"");
        let back: SecretId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_secret_missing_rotation_date_deserializes_as_none() {
        let json = r#"{
            "secret_id": "sec-001",
            "name": "db-key",
            "service": "billing-db",
            "description": "Database credentials",
            "last_accessed": "2026-01-10"
        }"#;
        let secret: Secret = serde_json::from_str(json).unwrap();
        assert!(secret.next_rotation_date.is_none());
    }

    #[test]
    fn test_file_transfer_timestamp_parses_utc() {
        let json = r#"{
            "activity_id": "act-001",
            "name": "quarterly-report.xlsx",
            "activity_type": "File Sharing",
            "description": "Quarterly financials",
            "timestamp": "2026-01-10T08:30:00Z",
            "size_mb": 4.2,
            "location": { "source": "corp-share", "destination": "partner-portal" },
            "sharing_status": "internal"
        }"#;
        let transfer: FileTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.timestamp.date_naive().to_string(), "2026-01-10");
        assert_eq!(transfer.location.destination, "partner-portal");
    }
}
