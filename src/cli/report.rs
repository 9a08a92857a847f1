//! Report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::summary::{format_category_summary, format_spending_chart};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::CategoryFilter;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show totals per category
    Summary,

    /// Show the total amount spent
    Total {
        /// Only total this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a bar chart of spending by category
    Chart,
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            print!(
                "{}",
                format_category_summary(&ledger.summary_by_category(), currency)
            );
        }

        ReportCommands::Total { category } => {
            let filter: CategoryFilter = match category {
                Some(label) => label.parse()?,
                None => CategoryFilter::All,
            };
            let total = ledger.total_for(filter.clone());
            match filter {
                CategoryFilter::All => {
                    println!("Total expenses: {}", total.format_with_symbol(currency))
                }
                CategoryFilter::Only(category) => println!(
                    "Total for {}: {}",
                    category,
                    total.format_with_symbol(currency)
                ),
            }
        }

        ReportCommands::Chart => {
            print!("{}", format_spending_chart(&ledger.chart_data(), currency));
        }
    }

    Ok(())
}
