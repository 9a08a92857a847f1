//! The expense ledger
//!
//! A [`Ledger`] owns the in-memory list of expenses, hands out IDs and keeps
//! its backing JSON file in sync: every add or remove rewrites the file before
//! the call returns. Read operations never touch the file.
//!
//! Storage problems never abort the caller. A missing or unreadable file at
//! open gives an empty ledger (see [`LoadStatus`]); a failed write after a
//! mutation is reported through [`Saved`] while the in-memory change stands.
//!
//! Only one ledger should point at a given file at a time. With two, the last
//! one to save wins.

pub mod query;
pub mod summary;

pub use query::{ExpenseQuery, SortKey, SortOrder};
pub use summary::{CategorySummary, ChartData};

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::export::export_expenses_csv;
use crate::models::{Category, CategoryFilter, Expense, ExpenseId, ExpenseRecord, Money};
use crate::storage::ExpenseStore;

/// What [`Ledger::open`] found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet; the ledger starts empty
    Missing,
    /// The file was read; holds the number of expenses loaded
    Loaded(usize),
    /// The file could not be used; the ledger starts empty
    Malformed(String),
}

impl LoadStatus {
    /// Check if the file existed but could not be used
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// The result of a mutation that was applied in memory
///
/// `save_error` is set when writing the ledger file failed afterwards. The
/// change is not rolled back, so memory and disk may now disagree.
#[derive(Debug)]
#[must_use]
pub struct Saved<T> {
    pub value: T,
    pub save_error: Option<LedgerError>,
}

impl<T> Saved<T> {
    /// Whether the ledger file reflects this change
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }

    /// The mutation's result, ignoring any save error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Treat a failed save as an error
    pub fn into_result(self) -> LedgerResult<T> {
        match self.save_error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

/// A personal expense ledger backed by a JSON file
#[derive(Debug)]
pub struct Ledger {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
    store: ExpenseStore,
    load_status: LoadStatus,
}

impl Ledger {
    /// Open the ledger stored at `path`
    ///
    /// Never fails: a missing file gives an empty ledger and a malformed one
    /// gives an empty ledger with [`LoadStatus::Malformed`]. The next ID is
    /// one past the highest loaded ID, or 0.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let store = ExpenseStore::new(path.as_ref());

        let (expenses, load_status) = match store.load() {
            Ok(Some(expenses)) => {
                let count = expenses.len();
                info!(count, path = %store.path().display(), "loaded expenses");
                (expenses, LoadStatus::Loaded(count))
            }
            Ok(None) => {
                info!(path = %store.path().display(), "no ledger file, starting empty");
                (Vec::new(), LoadStatus::Missing)
            }
            Err(err) => {
                warn!(error = %err, "ledger file unusable, starting empty");
                (Vec::new(), LoadStatus::Malformed(err.to_string()))
            }
        };

        // The store rejects u64::MAX, so a loaded id always has a successor
        let next_id = match expenses.iter().map(|e| e.id()).max() {
            Some(highest) => highest.next().unwrap_or(highest),
            None => ExpenseId::new(0),
        };
        debug!(next_id = %next_id, "ID counter synchronized");

        Self {
            expenses,
            next_id,
            store,
            load_status,
        }
    }

    /// Record a new expense
    ///
    /// Fails with a validation error, leaving the ledger untouched, when the
    /// amount is not positive or too large, the category is empty or the ID
    /// range is used up. Otherwise the expense gets the next ID, is appended
    /// and the file is rewritten.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: Category,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Saved<Expense>> {
        let following = self.next_id.next().ok_or_else(|| {
            LedgerError::Validation("No expense IDs left in this ledger".into())
        })?;
        let expense = Expense::new(self.next_id, amount, category, date)?;
        self.next_id = following;
        self.expenses.push(expense.clone());
        debug!(
            id = %expense.id(),
            amount = %expense.amount(),
            category = %expense.category(),
            "added expense"
        );

        let save_error = self.persist();
        Ok(Saved {
            value: expense,
            save_error,
        })
    }

    /// Remove the expense with this ID
    ///
    /// `value` is `false` when no such expense exists; nothing is written then.
    pub fn remove_expense_by_id(&mut self, id: ExpenseId) -> Saved<bool> {
        let Some(index) = self.expenses.iter().position(|e| e.id() == id) else {
            warn!(id = %id, "no expense with this id");
            return Saved {
                value: false,
                save_error: None,
            };
        };

        self.expenses.remove(index);
        debug!(id = %id, "removed expense");
        Saved {
            value: true,
            save_error: self.persist(),
        }
    }

    /// Remove every expense; IDs already handed out are still never reused
    pub fn clear(&mut self) -> Saved<usize> {
        let removed = self.expenses.len();
        self.expenses.clear();
        debug!(removed, "cleared ledger");
        Saved {
            value: removed,
            save_error: self.persist(),
        }
    }

    /// All expenses as records, in insertion order
    pub fn list_all(&self) -> Vec<ExpenseRecord> {
        self.expenses.iter().map(Expense::to_record).collect()
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses in one category, or all of them for [`CategoryFilter::All`]
    pub fn filter_by_category(&self, filter: impl Into<CategoryFilter>) -> Vec<&Expense> {
        let filter = filter.into();
        self.expenses
            .iter()
            .filter(|e| filter.matches(e.category()))
            .collect()
    }

    /// Filtered and optionally sorted listing
    pub fn query(&self, query: &ExpenseQuery) -> Vec<&Expense> {
        query.apply(&self.expenses)
    }

    /// Sum of amounts per category present in the ledger
    pub fn summary_by_category(&self) -> CategorySummary {
        CategorySummary::from_expenses(&self.expenses)
    }

    /// Sum of every amount in the ledger
    pub fn total_expense(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Sum of the amounts a filter selects
    pub fn total_for(&self, filter: impl Into<CategoryFilter>) -> Money {
        self.filter_by_category(filter)
            .into_iter()
            .map(Expense::amount)
            .sum()
    }

    /// Category totals as parallel label/value lists, positive totals only
    pub fn chart_data(&self) -> ChartData {
        self.summary_by_category().to_chart_data()
    }

    /// Write every expense to a CSV file, returning the number of rows
    ///
    /// Fails with [`LedgerError::Export`] when the ledger is empty (no file
    /// is created) or the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> LedgerResult<usize> {
        let path = path.as_ref();
        match export_expenses_csv(&self.expenses, path) {
            Ok(rows) => {
                info!(rows, path = %path.display(), "exported expenses");
                Ok(rows)
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "export failed");
                Err(err)
            }
        }
    }

    /// Look up an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Number of expenses in the ledger
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The ID the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// What was found on disk when the ledger was opened
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    fn persist(&self) -> Option<LedgerError> {
        match self.store.save(&self.expenses) {
            Ok(()) => None,
            Err(err) => {
                error!(error = %err, "failed to save ledger; memory and disk may differ");
                Some(err)
            }
        }
    }
}
