//! YAML Export functionality
//!
//! Human-readable export of the full expense records.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Export expenses as a YAML sequence
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    serde_yaml::to_writer(writer, expenses)?;
    Ok(())
}
