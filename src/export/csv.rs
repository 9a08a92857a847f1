//! CSV Export functionality
//!
//! Exports expenses to CSV with the header `id,date,category,amount`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::expense::DATE_FORMAT;
use crate::models::Expense;

/// Column order of the export
pub const CSV_HEADER: [&str; 4] = ["id", "date", "category", "amount"];

/// One exported row, in header order
fn csv_row(expense: &Expense) -> [String; 4] {
    [
        expense.id().to_string(),
        expense.date().format(DATE_FORMAT).to_string(),
        expense.category().label().to_string(),
        expense.amount().to_decimal_string(),
    ]
}

/// Write expenses as CSV to any writer, returning the number of data rows
pub fn write_expenses_csv<'a, W, I>(writer: W, expenses: I) -> LedgerResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Expense>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for expense in expenses {
        csv_writer.write_record(csv_row(expense))?;
        rows += 1;
    }

    let mut inner = csv_writer
        .into_inner()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV: {}", e)))?;
    inner
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(rows)
}

/// Export expenses to a CSV file
///
/// Refuses an empty set without touching the filesystem. A file that fails
/// partway through is removed.
pub fn export_expenses_csv<P: AsRef<Path>>(expenses: &[Expense], path: P) -> LedgerResult<usize> {
    let path = path.as_ref();

    if expenses.is_empty() {
        return Err(LedgerError::Export("No expenses to export".into()));
    }

    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let result = write_expenses_csv(BufWriter::new(file), expenses);
    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(id: u64, cents: i64, category: Category) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 10, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_write_expenses_csv() {
        let expenses = vec![
            expense(0, 5000, Category::Food),
            expense(1, 120000, Category::HomeUtilities),
        ];

        let mut output = Vec::new();
        let rows = write_expenses_csv(&mut output, &expenses).unwrap();
        assert_eq!(rows, 2);

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "id,date,category,amount\n\
             0,2025-10-01,Food,50.00\n\
             1,2025-10-01,Home & Utilities,1200.00\n"
        );
    }

    #[test]
    fn test_quotes_labels_with_commas() {
        let expenses = vec![expense(7, 100, Category::Custom("Books, magazines".into()))];

        let mut output = Vec::new();
        write_expenses_csv(&mut output, &expenses).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("7,2025-10-01,\"Books, magazines\",1.00"));
    }

    #[test]
    fn test_export_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let expenses = vec![expense(0, 5000, Category::Food)];

        assert_eq!(export_expenses_csv(&expenses, &path).unwrap(), 1);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert_eq!(contents.lines().next(), Some("id,date,category,amount"));
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let err = export_expenses_csv(&[], &path).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("out.csv");
        let expenses = vec![expense(0, 5000, Category::Food)];

        let err = export_expenses_csv(&expenses, &path).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
