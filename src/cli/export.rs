//! CLI command for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_entries_csv;
use crate::services::EntryService;
use crate::storage::Storage;

/// Export a user's entries as the full-table CSV dump
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    output: PathBuf,
    user: Option<String>,
) -> FintrackResult<()> {
    let user = user.unwrap_or_else(|| settings.default_user.clone());
    let service = EntryService::new(storage);
    let entries = service.entries_for(&user)?;

    let file = File::create(&output).map_err(|e| {
        FintrackError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_entries_csv(&entries, &mut writer)?;

    println!("Exported {} entries to: {}", entries.len(), output.display());

    Ok(())
}
