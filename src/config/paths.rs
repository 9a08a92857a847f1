//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/expense-ledger` or `~/.local/share/expense-ledger`
//! 3. Windows: `%APPDATA%\expense-ledger`

use std::path::PathBuf;

use crate::error::LedgerError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DIR";

const APP_DIR_NAME: &str = "expense-ledger";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all ledger data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the data directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The data directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the ledger file (expenses.json)
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Where `export` writes when no path is given
    pub fn default_export_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Create the base directory if needed
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(data_home).join(APP_DIR_NAME));
    }

    let home = std::env::var_os("HOME")
        .ok_or_else(|| LedgerError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join(APP_DIR_NAME))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
