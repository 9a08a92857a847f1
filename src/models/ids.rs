//! Strongly-typed ID wrapper for expenses
//!
//! IDs are plain non-negative integers handed out sequentially by a ledger.
//! The newtype keeps them from being mixed up with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Identity of a single expense within one ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` once the range is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Accept "#3" as shown in listings
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| LedgerError::Validation(format!("ID must be a whole number, got '{}'", s)))
    }
}
