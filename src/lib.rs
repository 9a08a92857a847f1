//! Expense Ledger - a personal expense ledger
//!
//! This library records expenses (a positive amount, a category and a date),
//! keeps them in a JSON file and offers filtered listings, per-category
//! summaries, chart data and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, IDs, categories, expenses)
//! - `storage`: JSON file storage layer
//! - `ledger`: The ledger itself, with queries and summaries
//! - `export`: CSV export
//! - `display`: Text formatting for terminal output
//! - `cli`: Command handlers for the `expense` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::ledger::Ledger;
//! use expense_ledger::models::{Category, Money};
//!
//! let mut ledger = Ledger::open("expenses.json");
//! let saved = ledger.add_expense(Money::from_cents(5000), Category::Food, None)?;
//! assert!(saved.is_saved());
//! println!("Total: {}", ledger.total_expense());
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
