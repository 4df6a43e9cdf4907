//! JSON Export functionality
//!
//! Full expense records in the same shape as `expenses.json`.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Export expenses as pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(writer, expenses)?;
    Ok(())
}
