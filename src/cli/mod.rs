//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod export;
pub mod expense;
pub mod report;

pub use export::{handle_export_command, ExportArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
