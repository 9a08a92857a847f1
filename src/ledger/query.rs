//! Filtered and sorted retrieval

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::models::{CategoryFilter, Expense};

/// Column to order a listing by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Date,
    Category,
    Amount,
}

impl SortKey {
    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Id => a.id().cmp(&b.id()),
            Self::Date => a.date().cmp(&b.date()),
            Self::Category => a.category().label().cmp(b.category().label()),
            Self::Amount => a.amount().cmp(&b.amount()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Date => write!(f, "date"),
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

impl FromStr for SortKey {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            "amount" => Ok(Self::Amount),
            other => Err(LedgerError::Validation(format!(
                "Unknown sort key '{}' (expected id, date, category or amount)",
                other
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A category filter plus an optional ordering
///
/// Without a sort key results keep insertion order. Sorting is stable, so
/// equal keys also keep insertion order in either direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub filter: CategoryFilter,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
}

impl ExpenseQuery {
    /// All expenses in insertion order
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category
    pub fn category(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Order results by this column
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// Set the sort direction
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sort in descending order
    pub fn descending(self) -> Self {
        self.order(SortOrder::Descending)
    }

    /// Run the query over a slice of expenses
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        let mut selected: Vec<&Expense> = expenses
            .iter()
            .filter(|e| self.filter.matches(e.category()))
            .collect();

        if let Some(key) = self.sort {
            match self.order {
                SortOrder::Ascending => selected.sort_by(|a, b| key.compare(a, b)),
                SortOrder::Descending => selected.sort_by(|a, b| key.compare(b, a)),
            }
        }

        selected
    }
}
