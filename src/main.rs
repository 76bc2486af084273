use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_delete_command, handle_export_command,
    handle_summary_command, handle_update_command, handle_view_command, report_outcome, AddArgs,
    BudgetArgs, DeleteArgs, ExportArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal expense tracker",
    long_about = "Records dated expenses, keeps a spending budget per calendar month, \
                  and reports totals. Data is stored as JSON in the data directory \
                  (the current directory unless overridden)."
)]
struct Cli {
    /// Directory holding expenses.json, budget.json and config.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Change an expense's description and amount
    Update(UpdateArgs),

    /// Remove an expense
    Delete(DeleteArgs),

    /// List all expenses
    #[command(alias = "list")]
    View,

    /// Show total spending, optionally for one month
    Summary(SummaryArgs),

    /// Set the budget for a month
    Budget(BudgetArgs),

    /// Export expenses and budgets
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if there is none
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(&paths)?;

    let outcome = match cli.command {
        Commands::Add(args) => handle_add_command(&storage, args),
        Commands::Update(args) => handle_update_command(&storage, args),
        Commands::Delete(args) => handle_delete_command(&storage, args),
        Commands::View => handle_view_command(&storage, &settings),
        Commands::Summary(args) => handle_summary_command(&storage, args),
        Commands::Budget(args) => handle_budget_command(&storage, args),
        Commands::Export(args) => handle_export_command(&storage, args),
        Commands::Config { init } => {
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
            Ok(())
        }
    };

    report_outcome(outcome)?;
    Ok(())
}
