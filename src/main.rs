use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fintrack::cli::{
    handle_dashboard_command, handle_entry_command, handle_export_command, handle_goal_command,
    EntryCommands, GoalCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack records monthly income and expense entries into a \
                  local file-backed store and renders aggregate views and \
                  savings-goal progress over them from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Entry management commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Show the dashboard: totals, breakdown, entries, goal progress
    Dashboard {
        /// Show the dashboard for this user instead of the configured default
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Export the aggregated view to CSV
    Export {
        /// Output file path
        output: PathBuf,

        /// Export entries for this user instead of the configured default
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Initialize the store
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard { user }) => {
            handle_dashboard_command(&storage, &settings, user)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Export { output, user }) => {
            handle_export_command(&storage, &settings, output, user)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.data_dir().display());
            fintrack::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record your first entry with:");
            println!("  fintrack entry add january 2024 --income 5000 --rent 1500");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default user:    {}", settings.default_user);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Savings goal:    {}",
                settings
                    .savings_goal
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to see your overview.");
        }
    }

    Ok(())
}
