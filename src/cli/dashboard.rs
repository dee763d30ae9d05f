//! CLI command for the dashboard view

use crate::config::Settings;
use crate::display::{format_entry_table, format_goal_progress, format_overview};
use crate::error::FintrackResult;
use crate::reports::Overview;
use crate::services::EntryService;
use crate::storage::Storage;

/// Render the dashboard: overview metrics, expenses breakdown, entries
/// table, and savings-goal progress
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    user: Option<String>,
) -> FintrackResult<()> {
    let user = user.unwrap_or_else(|| settings.default_user.clone());
    let service = EntryService::new(storage);
    let entries = service.entries_for(&user)?;

    if entries.is_empty() {
        println!("No entries for {} yet. Record one with 'fintrack entry add'.", user);
        return Ok(());
    }

    let overview = Overview::from_entries(&entries);
    let symbol = &settings.currency_symbol;

    println!("{}", format_overview(&overview, &user, symbol));
    println!("{}", format_entry_table(&entries, symbol));
    println!();
    println!("{}", format_goal_progress(&overview, settings.savings_goal, symbol));

    Ok(())
}
