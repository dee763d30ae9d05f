//! Storage layer for fintrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage` is the single durable owner of the entry collection;
//! it is created once at startup and passed by reference to whichever
//! component needs it.

pub mod entries;
pub mod file_io;
pub mod init;

pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator
pub struct Storage {
    paths: FintrackPaths,
    audit: AuditLogger,
    pub entries: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Opens or creates the backing store location; fails with a storage
    /// error if the directories cannot be created.
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.entries.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.entries.save()?;
        Ok(())
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FintrackError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), FintrackError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            after,
            diff_summary,
        ))
    }
}
