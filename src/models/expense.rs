//! Expense model
//!
//! An expense is one recorded transaction: an amount spent, the category it
//! belongs to and the day it happened. Once built it cannot be changed;
//! correcting an expense means removing it and adding a new one.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Storage and display format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    id: ExpenseId,
    date: NaiveDate,
    amount: Money,
    category: Category,
}

impl Expense {
    /// Create a new expense
    ///
    /// The amount must be strictly positive. When `date` is `None` the
    /// expense is dated today (local time).
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: Category,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Self> {
        validate_amount(amount)?;
        let category = category
            .normalize()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        Ok(Self {
            id,
            date: date.unwrap_or_else(today),
            amount,
            category,
        })
    }

    /// The expense's ID
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// The day the expense happened
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The category the expense is filed under
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The structured record view used for persistence, export and display
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id,
            date: self.date,
            amount: self.amount,
            category: self.category.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}: {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

/// Flat record form of an expense
///
/// Field order matches the ledger file: `id`, `date`, `amount`, `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Category,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        expense.to_record()
    }
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = LedgerError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Expense::new(record.id, record.amount, record.category, Some(record.date))
    }
}

/// Reject zero, negative and oversized amounts
pub fn validate_amount(amount: Money) -> LedgerResult<()> {
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Amount must be positive, got {}",
            amount.to_decimal_string()
        )));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "Amount must be at most {}, got {}",
            Money::MAX_AMOUNT.to_decimal_string(),
            amount.to_decimal_string()
        )));
    }
    Ok(())
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
    })
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            ExpenseId::new(0),
            Money::from_cents(5000),
            Category::Food,
            Some(date(2025, 10, 1)),
        )
        .unwrap();

        assert_eq!(expense.id(), ExpenseId::new(0));
        assert_eq!(expense.amount().cents(), 5000);
        assert_eq!(expense.category(), &Category::Food);
        assert_eq!(expense.date(), date(2025, 10, 1));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let expense =
            Expense::new(ExpenseId::new(1), Money::from_cents(100), Category::Other, None).unwrap();
        assert_eq!(expense.date(), today());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for cents in [0, -500] {
            let err = Expense::new(
                ExpenseId::new(0),
                Money::from_cents(cents),
                Category::Food,
                None,
            )
            .unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_rejects_amount_above_limit() {
        let at_limit = Expense::new(ExpenseId::new(0), Money::MAX_AMOUNT, Category::Rent, None);
        assert!(at_limit.is_ok());

        let err = Expense::new(
            ExpenseId::new(0),
            Money::from_cents(Money::MAX_AMOUNT.cents() + 1),
            Category::Rent,
            None,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_empty_custom_category() {
        let err = Expense::new(
            ExpenseId::new(0),
            Money::from_cents(100),
            Category::Custom("  ".into()),
            None,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_record_json_shape() {
        let expense = Expense::new(
            ExpenseId::new(1),
            Money::from_cents(120000),
            Category::Rent,
            Some(date(2025, 10, 3)),
        )
        .unwrap();

        let json = serde_json::to_value(expense.to_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "date": "2025-10-03",
                "amount": 1200.0,
                "category": "Rent"
            })
        );
    }

    #[test]
    fn test_record_try_from_validates() {
        let record = ExpenseRecord {
            id: ExpenseId::new(4),
            date: date(2025, 1, 1),
            amount: Money::from_cents(-1),
            category: Category::Food,
        };
        assert!(Expense::try_from(record).unwrap_err().is_validation());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(
            ExpenseId::new(0),
            Money::from_cents(1234),
            Category::HomeUtilities,
            Some(date(2025, 2, 3)),
        )
        .unwrap();
        assert_eq!(expense.to_string(), "2025-02-03 | Home & Utilities: $12.34");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-10-01").unwrap(), date(2025, 10, 1));
        assert!(parse_date("10/01/2025").unwrap_err().is_validation());
        assert!(parse_date("2025-02-30").is_err());
    }
}
