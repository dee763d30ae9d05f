//! CLI command handlers

pub mod dashboard;
pub mod entry;
pub mod export;
pub mod goal;

pub use dashboard::handle_dashboard_command;
pub use entry::{handle_entry_command, EntryCommands};
pub use export::handle_export_command;
pub use goal::{handle_goal_command, GoalCommands};
