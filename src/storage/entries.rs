//! Entry repository for JSON storage
//!
//! Manages loading and saving financial entries to entries.json. The
//! repository is append-only: entries are never updated or deleted, and the
//! on-disk order is the insertion order, which is also the order queries
//! return. Loading re-verifies the derived-field invariants of every record,
//! so a hand-edited store file is rejected rather than silently trusted.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{EntryId, FinancialEntry};

use super::file_io::{read_json, write_json_atomic};

/// Serializable entry data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<FinancialEntry>,
}

/// Repository for financial entry persistence
///
/// Backed by a plain `Vec` rather than an indexed map: insertion order is
/// part of the query contract, the entity is append-only, and a single
/// user's history is small enough that a linear scan is the simplest thing
/// that works.
pub struct EntryRepository {
    path: PathBuf,
    data: RwLock<Vec<FinancialEntry>>,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk
    ///
    /// Verifies the derived-field invariants of every record; a record whose
    /// stored totals do not match its category amounts fails the load with a
    /// storage error.
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: EntryData = read_json(&self.path)?;

        for entry in &file_data.entries {
            entry.verify_invariants().map_err(|e| {
                FintrackError::Storage(format!(
                    "incompatible data in {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.entries;
        Ok(())
    }

    /// Save entries to disk, preserving insertion order
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = EntryData {
            entries: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a new entry
    ///
    /// The entry must already be validated (constructed via
    /// `FinancialEntry::from_draft`); the repository does not re-validate.
    pub fn append(&self, entry: FinancialEntry) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(entry);
        Ok(())
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<FinancialEntry>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries in insertion order
    pub fn get_all(&self) -> Result<Vec<FinancialEntry>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get all entries for a user, in insertion order
    ///
    /// Returns an empty vec, never an error, for a user with no entries.
    pub fn get_by_user(&self, user: &str) -> Result<Vec<FinancialEntry>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().filter(|e| e.user == user).cloned().collect())
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
