//! Error type shared by every layer of the tracker
//!
//! Two kinds of failure matter to the binary: problems the user can fix by
//! re-running the command (bad amounts, unknown ids), which are printed and
//! end the process normally, and everything else, which aborts it.

use thiserror::Error;

/// Errors raised while loading, changing or exporting expenses
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Unusable data directory or settings file
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input; the message is shown as-is
    #[error("{0}")]
    Validation(String),

    /// No record carries the requested id
    #[error("{entity_type} with ID {identifier} not found")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Loading or saving a data file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The export file could not be written
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors that are reported to the user without failing the process
    pub fn is_user_facing(&self) -> bool {
        self.is_validation() || self.is_not_found()
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_yaml::Error> for ExpenseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
