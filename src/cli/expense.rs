//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and removing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_details, format_expense_register};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{ExpenseQuery, Ledger, SortKey};
use crate::models::{parse_date, Category, CategoryFilter, ExpenseId, ExpenseRecord, Money};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "50" or "12.34")
        amount: String,
        /// Category name (e.g., "Food", "Home & Utilities")
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove an expense by ID
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: String,
    },

    /// Show a single expense
    Show {
        /// Expense ID
        id: String,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category ("All" shows everything)
        #[arg(short, long)]
        category: Option<String>,
        /// Sort by id, date, category or amount
        #[arg(short, long)]
        sort: Option<String>,
        /// Reverse the sort order
        #[arg(long)]
        desc: bool,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every expense
    Clear {
        /// Confirm clearing the ledger
        #[arg(long)]
        yes: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let amount = Money::parse_amount(&amount)?;
            let category: Category = category.parse()?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let saved = ledger.add_expense(amount, category, date)?;
            let expense = &saved.value;
            println!(
                "Added expense #{}: {} {}",
                expense.id(),
                expense.category(),
                expense.amount().format_with_symbol(currency)
            );
            println!("  Date: {}", expense.date());
            saved.into_result()?;
        }

        ExpenseCommands::Remove { id } => {
            let id: ExpenseId = id.parse()?;
            let saved = ledger.remove_expense_by_id(id);
            if !saved.value {
                return Err(LedgerError::expense_not_found(id.to_string()));
            }
            println!("Removed expense #{}", id);
            saved.into_result()?;
        }

        ExpenseCommands::Show { id } => {
            let id: ExpenseId = id.parse()?;
            let expense = ledger
                .get(id)
                .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, currency));
        }

        ExpenseCommands::List {
            category,
            sort,
            desc,
            json,
        } => {
            let filter: CategoryFilter = match category {
                Some(label) => label.parse()?,
                None => CategoryFilter::All,
            };
            let mut query = ExpenseQuery::new().category(filter);
            if let Some(key) = sort {
                query = query.sort_by(key.parse::<SortKey>()?);
            }
            if desc {
                query = query.descending();
            }

            let expenses = ledger.query(&query);
            if json {
                let records: Vec<ExpenseRecord> = expenses.iter().map(|e| e.to_record()).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", format_expense_register(&expenses, currency));
            }
        }

        ExpenseCommands::Clear { yes } => {
            if !yes {
                return Err(LedgerError::Validation(
                    "Refusing to clear the ledger without --yes".into(),
                ));
            }
            let saved = ledger.clear();
            println!("Removed {} expense(s)", saved.value);
            saved.into_result()?;
        }
    }

    Ok(())
}
