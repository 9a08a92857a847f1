//! Expense display formatting
//!
//! Register-style listing of expenses for terminal output.

use super::report::{separator, truncate};
use crate::models::expense::DATE_FORMAT;
use crate::models::{Expense, Money};

const CATEGORY_WIDTH: usize = 20;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:>5}  {}  {:<width$}  {:>14}",
        expense.id().to_string(),
        expense.date().format(DATE_FORMAT),
        truncate(expense.category().label(), CATEGORY_WIDTH),
        expense.amount().format_with_symbol(currency),
        width = CATEGORY_WIDTH
    )
}

/// Format a list of expenses with a header and a total line
pub fn format_expense_register(expenses: &[&Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:10}  {:<width$}  {:>14}\n",
        "ID",
        "Date",
        "Category",
        "Amount",
        width = CATEGORY_WIDTH
    ));
    output.push_str(&separator(57));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount()).sum();
    output.push_str(&separator(57));
    output.push('\n');
    output.push_str(&format!(
        "Total displayed expenses: {}\n",
        total.format_with_symbol(currency)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  #{}\n", expense.id()));
    output.push_str(&format!("Date:     {}\n", expense.date().format(DATE_FORMAT)));
    output.push_str(&format!("Category: {}\n", expense.category()));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount().format_with_symbol(currency)
    ));
    output
}
