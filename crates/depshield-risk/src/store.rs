//! Employee record storage trait and implementations.
//!
//! The engine reads records through [`EmployeeRecordStore`]; where they live
//! is the caller's concern. Two implementations ship with the crate: an
//! in-memory store for tests and a flat-JSON store matching the shape the
//! collection tooling exports (`employees` arrays keyed by `user_id`).

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use crate::error::{Result, RiskError};
use crate::types::{EmployeeId, FileTransfer, Secret};

/// Read-only access to an employee's records.
#[async_trait]
pub trait EmployeeRecordStore: Send + Sync {
    /// Load the secrets an employee can reach.
    ///
    /// Returns `None` when the employee is unknown to the secret inventory.
    async fn load_secrets(&self, employee_id: &EmployeeId) -> Result<Option<Vec<Secret>>>;

    /// Load an employee's file-transfer activity.
    ///
    /// Returns `None` when the employee is unknown to the activity log.
    async fn load_transfers(&self, employee_id: &EmployeeId) -> Result<Option<Vec<FileTransfer>>>;
}

/// In-memory implementation of [`EmployeeRecordStore`] for testing.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    secrets: RwLock<HashMap<EmployeeId, Vec<Secret>>>,
    transfers: RwLock<HashMap<EmployeeId, Vec<FileTransfer>>>,
}

impl InMemoryEmployeeStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an employee's secrets.
    pub fn insert_secrets(&self, employee_id: EmployeeId, secrets: Vec<Secret>) {
        self.secrets
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(employee_id, secrets);
    }

    /// Register an employee's file transfers.
    pub fn insert_transfers(&self, employee_id: EmployeeId, transfers: Vec<FileTransfer>) {
        self.transfers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(employee_id, transfers);
    }
}

#[async_trait]
impl EmployeeRecordStore for InMemoryEmployeeStore {
    async fn load_secrets(&self, employee_id: &EmployeeId) -> Result<Option<Vec<Secret>>> {
        Ok(self
            .secrets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(employee_id)
            .cloned())
    }

    async fn load_transfers(&self, employee_id: &EmployeeId) -> Result<Option<Vec<FileTransfer>>> {
        Ok(self
            .transfers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(employee_id)
            .cloned())
    }
}

#[derive(Debug, Deserialize)]
struct SecretDocument {
    employees: Vec<EmployeeSecrets>,
}

#[derive(Debug, Deserialize)]
struct EmployeeSecrets {
    user_id: EmployeeId,
    secrets: Vec<Secret>,
}

#[derive(Debug, Deserialize)]
struct TransferDocument {
    employees: Vec<EmployeeTransfers>,
}

#[derive(Debug, Deserialize)]
struct EmployeeTransfers {
    user_id: EmployeeId,
    files_and_transfers: Vec<FileTransfer>,
}

/// Flat-JSON implementation of [`EmployeeRecordStore`].
///
/// Both documents are read and decoded once at open time; lookups are
/// served from memory afterwards.
#[derive(Debug)]
pub struct JsonFileStore {
    secrets: HashMap<EmployeeId, Vec<Secret>>,
    transfers: HashMap<EmployeeId, Vec<FileTransfer>>,
}

impl JsonFileStore {
    /// Open the secret and file-transfer metadata documents.
    pub fn open(secret_path: impl AsRef<Path>, transfer_path: impl AsRef<Path>) -> Result<Self> {
        let secret_doc: SecretDocument = Self::read_document(secret_path.as_ref())?;
        let transfer_doc: TransferDocument = Self::read_document(transfer_path.as_ref())?;

        Ok(Self {
            secrets: secret_doc
                .employees
                .into_iter()
                .map(|e| (e.user_id, e.secrets))
                .collect(),
            transfers: transfer_doc
                .employees
                .into_iter()
                .map(|e| (e.user_id, e.files_and_transfers))
                .collect(),
        })
    }

    fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
        let raw = std::fs::read_to_string(path).map_err(|e| RiskError::Store {
            detail: format!("failed to read {}: {e}", path.display()),
        })?;
        serde_json::from_str(&raw).map_err(|e| RiskError::Store {
            detail: format!("failed to decode {}: {e}", path.display()),
        })
    }
}

#[async_trait]
impl EmployeeRecordStore for JsonFileStore {
    async fn load_secrets(&self, employee_id: &EmployeeId) -> Result<Option<Vec<Secret>>> {
        Ok(self.secrets.get(employee_id).cloned())
    }

    async fn load_transfers(&self, employee_id: &EmployeeId) -> Result<Option<Vec<FileTransfer>>> {
        Ok(self.transfers.get(employee_id).cloned())
    }
}
