//! Export module for the expense ledger
//!
//! Export is a one-way conversion of ledger contents into a spreadsheet
//! friendly CSV file, separate from the ledger's own JSON storage.

pub mod csv;

pub use self::csv::{export_expenses_csv, write_expenses_csv, CSV_HEADER};
