//! Expense repository for JSON storage
//!
//! Manages loading and saving the ledger file: a JSON array of records, each
//! with exactly `id`, `date`, `amount` and `category`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerError;
use crate::models::{Expense, ExpenseRecord};

use super::file_io::{read_json, write_json_atomic};

/// Backing file for one ledger
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the given file (nothing is read yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses in file order
    ///
    /// Returns `Ok(None)` when the file does not exist. Any unreadable,
    /// unparsable or invalid content (bad amount, duplicate id, an id with no
    /// successor) is a `StorageRead` error; nothing is partially loaded.
    pub fn load(&self) -> Result<Option<Vec<Expense>>, LedgerError> {
        let Some(records) = read_json::<Vec<ExpenseRecord>, _>(&self.path)? else {
            return Ok(None);
        };

        let mut seen = HashSet::with_capacity(records.len());
        let mut expenses = Vec::with_capacity(records.len());

        for record in records {
            if record.id.next().is_none() {
                return Err(LedgerError::StorageRead(format!(
                    "Expense id {} in {} is out of range",
                    record.id,
                    self.path.display()
                )));
            }
            if !seen.insert(record.id) {
                return Err(LedgerError::StorageRead(format!(
                    "Duplicate expense id {} in {}",
                    record.id,
                    self.path.display()
                )));
            }

            let id = record.id;
            let expense = Expense::try_from(record).map_err(|e| {
                LedgerError::StorageRead(format!(
                    "Invalid expense {} in {}: {}",
                    id,
                    self.path.display(),
                    e
                ))
            })?;
            expenses.push(expense);
        }

        Ok(Some(expenses))
    }

    /// Rewrite the whole file with the given expenses
    pub fn save(&self, expenses: &[Expense]) -> Result<(), LedgerError> {
        let records: Vec<ExpenseRecord> = expenses.iter().map(ExpenseRecord::from).collect();
        write_json_atomic(&self.path, &records)?;
        debug!(count = records.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }
}
