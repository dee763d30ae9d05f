//! Entry service
//!
//! Business logic for recording and querying monthly financial entries:
//! validate the draft, persist the entry, and write the audit record.

use crate::audit::EntityType;
use crate::error::FintrackResult;
use crate::models::{EntryDraft, EntryId, FinancialEntry};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new monthly entry
    ///
    /// Validates the draft (non-negative income and category amounts),
    /// computes the derived totals, assigns an id and creation timestamp,
    /// appends the record, and persists it durably before returning.
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative monetary fields; storage
    /// errors if the durable write fails.
    pub fn add(&self, draft: EntryDraft) -> FintrackResult<EntryId> {
        let entry = FinancialEntry::from_draft(draft)?;
        let id = entry.id;
        let name = format!("{} for {}", entry.period_label(), entry.user);

        self.storage.entries.append(entry.clone())?;
        self.storage.entries.save()?;

        self.storage
            .log_create(EntityType::Entry, id.to_string(), Some(name), &entry)?;

        Ok(id)
    }

    /// All entries for a user, in insertion order
    ///
    /// A user with no entries yields an empty vec, never an error.
    pub fn entries_for(&self, user: &str) -> FintrackResult<Vec<FinancialEntry>> {
        self.storage.entries.get_by_user(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn january_draft(user: &str) -> EntryDraft {
        EntryDraft {
            user: user.to_string(),
            month: "January".to_string(),
            year: 2024,
            income: Money::from_units(5000),
            rent: Money::from_units(1500),
            utilities: Money::from_units(300),
            groceries: Money::from_units(400),
            transportation: Money::from_units(200),
            entertainment: Money::from_units(150),
            others: Money::from_units(100),
        }
    }

    #[test]
    fn test_add_then_query_returns_entry_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let id = service.add(january_draft("ava")).unwrap();

        let entries = service.entries_for("ava").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].total_expenses, Money::from_units(2650));
        assert_eq!(entries[0].savings, Money::from_units(2350));
    }

    #[test]
    fn test_add_is_durable() {
        let (temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        service.add(january_draft("ava")).unwrap();

        // A fresh storage over the same location sees the entry
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.entries.get_by_user("ava").unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_negative_rent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let mut draft = january_draft("ava");
        draft.rent = Money::from_cents(-1);

        let err = service.add(draft).unwrap_err();
        assert!(err.is_validation());

        // Nothing was persisted
        assert_eq!(service.entries_for("ava").unwrap().len(), 0);
    }

    #[test]
    fn test_add_writes_audit_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        service.add(january_draft("ava")).unwrap();

        assert!(storage.paths().audit_log().exists());
    }

    #[test]
    fn test_unknown_user_queries_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        assert!(service.entries_for("nobody").unwrap().is_empty());
    }
}
