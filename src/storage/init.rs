//! Storage initialization
//!
//! Handles first-run setup: directory creation and an empty entry store.

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::FinancialEntry;

use super::file_io::write_json_atomic;

/// Serializable shape of a fresh entries file
#[derive(serde::Serialize)]
struct EmptyEntryData {
    entries: Vec<FinancialEntry>,
}

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &FintrackPaths) -> Result<(), FintrackError> {
    paths.ensure_directories()?;

    if !paths.entries_file().exists() {
        write_json_atomic(paths.entries_file(), &EmptyEntryData { entries: Vec::new() })?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.entries_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.entries_file().exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        assert!(paths.entries_file().exists());
    }
}
