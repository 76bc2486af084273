//! Path management for the expense tracker
//!
//! All files live side by side in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Locations of the files the tracker reads and writes
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the data and settings files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths, preferring an explicit directory over the working directory
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the current directory
    /// cannot be determined.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        log::debug!("Using data directory {}", base_dir.display());
        Ok(Self { base_dir })
    }

    /// Use `base_dir` as is, without consulting the environment
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// User settings; see [`crate::config::Settings`]
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(paths.budget_file(), temp_dir.path().join("budget.json"));
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::new(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_defaults_to_current_dir() {
        let paths = ExpensePaths::new(None).unwrap();
        assert_eq!(paths.base_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let paths = ExpensePaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
