//! Path management for the expense tracker
//!
//! All data lives in a single directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the data files
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ExpenseError::Config(format!("Could not determine current directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the data directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

    /// Ensure the data directory exists
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
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_default_is_current_dir() {
        let paths = TrackerPaths::new().unwrap();
        assert_eq!(paths.base_dir(), &std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let paths = TrackerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.json"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expense-tracker.json")
        );
    }
}
