//! Category summary and chart formatting

use super::report::{format_bar, format_percentage, separator, truncate};
use crate::ledger::{CategorySummary, ChartData};

const LABEL_WIDTH: usize = 20;
const BAR_WIDTH: usize = 30;

/// Format per-category totals followed by the grand total
pub fn format_category_summary(summary: &CategorySummary, currency: &str) -> String {
    if summary.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for (category, amount) in summary.iter() {
        output.push_str(&format!(
            "{:<width$}  {:>14}\n",
            truncate(category.label(), LABEL_WIDTH),
            amount.format_with_symbol(currency),
            width = LABEL_WIDTH
        ));
    }
    output.push_str(&separator(LABEL_WIDTH + 16));
    output.push('\n');
    output.push_str(&format!(
        "{:<width$}  {:>14}\n",
        "Total",
        summary.total().format_with_symbol(currency),
        width = LABEL_WIDTH
    ));
    output
}

/// Horizontal bar chart of spending shares
pub fn format_spending_chart(chart: &ChartData, currency: &str) -> String {
    if chart.is_empty() {
        return "No expense data to chart.\n".to_string();
    }

    let max = chart
        .values
        .iter()
        .map(|v| v.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::from("Spending Distribution by Category\n\n");
    for ((label, value), pct) in chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(chart.percentages())
    {
        output.push_str(&format!(
            "{:<width$} {} {:>6}  {}\n",
            truncate(label, LABEL_WIDTH),
            format_bar(value.cents() as f64, max, BAR_WIDTH),
            format_percentage(pct),
            value.format_with_symbol(currency),
            width = LABEL_WIDTH
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseId, Money};

    fn sample_summary() -> CategorySummary {
        let expenses = vec![
            Expense::new(ExpenseId::new(0), Money::from_cents(5000), Category::Food, None)
                .unwrap(),
            Expense::new(ExpenseId::new(1), Money::from_cents(15000), Category::Rent, None)
                .unwrap(),
        ];
        CategorySummary::from_expenses(&expenses)
    }

    #[test]
    fn test_format_category_summary() {
        let output = format_category_summary(&sample_summary(), "$");
        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with("Food"));
        assert!(lines[0].ends_with("$50.00"));
        assert!(lines[1].starts_with("Rent"));
        assert!(lines[3].ends_with("$200.00"));
    }

    #[test]
    fn test_empty_summary() {
        let output = format_category_summary(&CategorySummary::default(), "$");
        assert_eq!(output, "No expenses recorded.\n");
    }

    #[test]
    fn test_format_spending_chart() {
        let output = format_spending_chart(&sample_summary().to_chart_data(), "$");
        assert!(output.contains("25%"));
        assert!(output.contains("75%"));
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_empty_chart() {
        let output = format_spending_chart(&ChartData::default(), "$");
        assert_eq!(output, "No expense data to chart.\n");
    }
}
