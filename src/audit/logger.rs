//! Audit logger for the append-only audit log
//!
//! Each record is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::entry::AuditEntry;

/// Handles writing audit records to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit record.
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an audit record
    ///
    /// Appends the record as a JSON line to the audit log file.
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, entry: &AuditEntry) -> FintrackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FintrackError::Json(format!("Failed to serialize audit record: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FintrackError::Io(format!("Failed to write audit record: {}", e)))?;

        file.flush()
            .map_err(|e| FintrackError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit records from the log file
    ///
    /// Returns records in chronological order (oldest first).
    pub fn read_all(&self) -> FintrackResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FintrackError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                FintrackError::Json(format!(
                    "Failed to parse audit record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::EntityType;
    use tempfile::TempDir;

    #[test]
    fn test_log_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let record = AuditEntry::create(
            EntityType::Entry,
            "ent-0001",
            None,
            &serde_json::json!({"user": "ava"}),
        );
        logger.log(&record).unwrap();
        logger.log(&record).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_id, "ent-0001");
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        assert!(logger.read_all().unwrap().is_empty());
    }
}
