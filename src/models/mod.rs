//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger's
//! domain: expenses, their identities, categories and money amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategoryFilter};
pub use expense::{parse_date, today, Expense, ExpenseRecord};
pub use ids::ExpenseId;
pub use money::Money;
