use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_expense_command, handle_export_command, handle_report_command, ExpenseCommands,
    ExportArgs, ReportCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::ledger::{Ledger, LoadStatus};
use expense_ledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense ledger",
    long_about = "Record expenses by amount, category and date, then list, \
                  summarize, chart and export them. Expenses are kept in a \
                  JSON file in the data directory."
)]
struct Cli {
    /// Ledger file to use instead of the one in the data directory
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export all expenses to CSV
    Export(ExportArgs),

    /// List the categories offered when adding expenses
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current settings (with defaults filled in) to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    init_tracing(&settings.log_filter);

    let ledger_file = match cli.file {
        Some(file) => file,
        None => {
            paths.ensure_directories()?;
            paths.ledger_file()
        }
    };

    let Some(command) = cli.command else {
        println!("Expense Ledger - personal expense tracking");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config { init } = command {
        if init {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
            println!();
        }
        println!("Expense Ledger Configuration");
        println!("============================");
        println!("Data directory: {}", paths.base_dir().display());
        println!("Ledger file:    {}", ledger_file.display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Log filter:      {}", settings.log_filter);
        return Ok(());
    }

    if let Commands::Categories = command {
        for category in settings.category_choices() {
            println!("{}", category);
        }
        return Ok(());
    }

    let mut ledger = Ledger::open(&ledger_file);
    if let LoadStatus::Malformed(reason) = ledger.load_status() {
        eprintln!(
            "Warning: could not read {}, starting with an empty ledger",
            ledger_file.display()
        );
        eprintln!("  {}", reason);
    }

    match command {
        Commands::Expense(cmd) => handle_expense_command(&mut ledger, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ledger, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&ledger, &paths, args)
            .context("Export failed")?,
        Commands::Categories | Commands::Config { .. } => {}
    }

    Ok(())
}
