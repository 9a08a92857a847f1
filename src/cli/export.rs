//! Export CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::ledger::Ledger;

/// Arguments for `export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output CSV file (defaults to expenses.csv in the data directory)
    pub path: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    paths: &LedgerPaths,
    args: ExportArgs,
) -> LedgerResult<()> {
    let output = match args.path {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.default_export_file()
        }
    };

    let count = ledger.export_to_file(&output)?;
    println!("Exported {} expense(s) to {}", count, output.display());
    Ok(())
}
