//! Category aggregation
//!
//! Sums expense amounts per category in exact cents and reshapes the result
//! for charting.

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

/// Total spent per category
///
/// Only categories with at least one expense appear; there are no zero
/// entries. Iteration follows `Category` ordering: fixed labels first in
/// preset order, then custom labels alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    totals: BTreeMap<Category, Money>,
}

impl CategorySummary {
    /// Aggregate a set of expenses
    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category().clone()).or_default() += expense.amount();
        }
        Self { totals }
    }

    /// Sum for one category, if it has any expenses
    pub fn get(&self, category: &Category) -> Option<Money> {
        self.totals.get(category).copied()
    }

    /// Category totals in `Category` order
    pub fn iter(&self) -> impl Iterator<Item = (&Category, Money)> {
        self.totals.iter().map(|(c, m)| (c, *m))
    }

    /// Number of categories with expenses
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if no category has expenses
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.totals.values().sum()
    }

    /// Parallel label/value sequences, dropping non-positive totals
    pub fn to_chart_data(&self) -> ChartData {
        let (labels, values) = self
            .totals
            .iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(category, amount)| (category.label().to_string(), *amount))
            .unzip();
        ChartData { labels, values }
    }
}

/// Labels and values ready to hand to a plotting layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
}

impl ChartData {
    /// Check if there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Each value's share of the total, in percent
    pub fn percentages(&self) -> Vec<f64> {
        let total: Money = self.values.iter().sum();
        if total.is_zero() {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| v.cents() as f64 * 100.0 / total.cents() as f64)
            .collect()
    }
}
