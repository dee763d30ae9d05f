//! CLI commands for the savings goal

use clap::Subcommand;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::FintrackResult;
use crate::models::Money;
use crate::reports::{savings_progress, Overview};
use crate::services::EntryService;
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Set the savings goal
    Set {
        /// Goal amount
        amount: Money,
    },

    /// Show progress toward the savings goal
    Show {
        /// Show progress for this user instead of the configured default
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Handle goal commands
pub fn handle_goal_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: GoalCommands,
) -> FintrackResult<()> {
    match cmd {
        GoalCommands::Set { amount } => {
            let previous = settings.savings_goal;
            settings.savings_goal = amount;
            settings.save(storage.paths())?;

            storage.log_update(
                EntityType::Settings,
                "savings_goal".to_string(),
                None,
                settings,
                Some(format!("{} -> {}", previous, amount)),
            )?;

            println!(
                "Savings goal set to {}",
                amount.format_with_symbol(&settings.currency_symbol)
            );
        }
        GoalCommands::Show { user } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let service = EntryService::new(storage);
            let entries = service.entries_for(&user)?;
            let overview = Overview::from_entries(&entries);

            let goal = settings.savings_goal;
            if goal.cents() <= 0 {
                println!("No savings goal set. Use 'fintrack goal set <amount>'.");
                return Ok(());
            }

            let progress = savings_progress(overview.total_savings, goal);
            println!(
                "Current savings: {} / Goal: {} ({:.2}%)",
                overview
                    .total_savings
                    .format_with_symbol(&settings.currency_symbol),
                goal.format_with_symbol(&settings.currency_symbol),
                progress,
            );
        }
    }

    Ok(())
}
