//! Display formatting for terminal output
//!
//! Turns the ledger's structured results into text for the CLI. Currency
//! symbols are applied here, never in the ledger.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_details, format_expense_register, format_expense_row};
pub use summary::{format_category_summary, format_spending_chart};
