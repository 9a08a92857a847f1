//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{LedgerError, LedgerResult};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// In the ledger file an amount is a plain JSON number such as `12.34`; it is
/// converted to whole cents when read, so sums never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single expense may have ($10,000,000,000.00)
    ///
    /// Far below 2^53 cents, so the amount survives the ledger file's JSON
    /// number exactly, and millions of such expenses still sum within `i64`.
    pub const MAX_AMOUNT: Money = Money(1_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert from a decimal number, rounding to the nearest cent
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// The amount as a decimal number (for JSON output only; never sum these)
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5".
    /// More than two fractional digits is rejected rather than truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse an expense amount: numeric, strictly positive and at most
    /// [`Money::MAX_AMOUNT`]
    pub fn parse_amount(s: &str) -> LedgerResult<Self> {
        let amount = Self::parse(s).map_err(|e| LedgerError::Validation(e.to_string()))?;
        if !amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Amount must be positive, got {}",
                s.trim()
            )));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(LedgerError::Validation(format!(
                "Amount must be at most {}, got {}",
                Self::MAX_AMOUNT.to_decimal_string(),
                s.trim()
            )));
        }
        Ok(amount)
    }

    /// Plain decimal form with two fractional digits, e.g. "1200.00"
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Saturates at the `i64` bounds instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(120000).to_decimal_string(), "1200.00");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
        assert_eq!(Money::from_cents(-250).to_decimal_string(), "-2.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(matches!(
            Money::parse("1.999"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_parse_amount_requires_positive() {
        assert_eq!(Money::parse_amount("50.00").unwrap().cents(), 5000);
        assert!(Money::parse_amount("0").unwrap_err().is_validation());
        assert!(Money::parse_amount("-5").unwrap_err().is_validation());
        assert!(Money::parse_amount("fifty").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_upper_bound() {
        assert_eq!(
            Money::parse_amount("10000000000.00").unwrap(),
            Money::MAX_AMOUNT
        );
        assert!(Money::parse_amount("10000000000.01")
            .unwrap_err()
            .is_validation());
        assert!(Money::parse_amount("90000000000000000")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_largest_amount_serializes_exactly() {
        for cents in [Money::MAX_AMOUNT.cents(), Money::MAX_AMOUNT.cents() - 1, 12_345_678_901] {
            let amount = Money::from_cents(cents);
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "{} via {}", cents, json);
        }
    }

    #[test]
    fn test_addition_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big + Money::from_cents(5), Money::from_cents(i64::MAX));

        let mut total = big;
        total += big;
        assert_eq!(total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::from_f64(12.34).unwrap().cents(), 1234);
        assert_eq!(Money::from_f64(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_f64(1200.0).unwrap().cents(), 120000);
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_sum_has_no_drift() {
        let tenth = Money::parse("0.10").unwrap();
        let total: Money = std::iter::repeat(tenth).take(10).sum();
        assert_eq!(total, Money::from_cents(100));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("1200").unwrap();
        assert_eq!(from_int.cents(), 120000);
    }
}
