//! CLI commands for entry management
//!
//! The `entry add` form mirrors the original dashboard sidebar: month, year,
//! income, and the six expense categories, all defaulting to zero except the
//! required income.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_entry_table;
use crate::error::FintrackResult;
use crate::models::{EntryDraft, Money, Month};
use crate::services::EntryService;
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record a new monthly entry
    Add {
        /// Month the entry is for
        #[arg(value_enum, ignore_case = true)]
        month: Month,

        /// Year the entry is for
        year: i32,

        /// Monthly income
        #[arg(short, long, allow_hyphen_values = true)]
        income: Money,

        /// Rent or mortgage payment
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rent: Money,

        /// Utilities
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        utilities: Money,

        /// Groceries
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        groceries: Money,

        /// Transportation
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        transportation: Money,

        /// Entertainment
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        entertainment: Money,

        /// Everything else
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        others: Money,

        /// Record under this user instead of the configured default
        #[arg(short, long)]
        user: Option<String>,
    },

    /// List recorded entries
    List {
        /// List entries for this user instead of the configured default
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Handle entry commands
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> FintrackResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            month,
            year,
            income,
            rent,
            utilities,
            groceries,
            transportation,
            entertainment,
            others,
            user,
        } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let draft = EntryDraft {
                user: user.clone(),
                month: month.name().to_string(),
                year,
                income,
                rent,
                utilities,
                groceries,
                transportation,
                entertainment,
                others,
            };

            let id = service.add(draft)?;
            println!("Recorded {} {} for {} ({})", month, year, user, id);
        }
        EntryCommands::List { user } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let entries = service.entries_for(&user)?;
            println!("{}", format_entry_table(&entries, &settings.currency_symbol));
        }
    }

    Ok(())
}
