//! CSV Export functionality
//!
//! Writes one row per expense under an `ID,Date,Description,Amount,Category`
//! header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export expenses to CSV in storage order
pub fn export_expenses_csv<W: Write>(
    expenses: &[Expense],
    date_format: &str,
    writer: W,
) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(["ID", "Date", "Description", "Amount", "Category"])?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.format(date_format).to_string(),
            expense.description.clone(),
            expense.amount.to_decimal_string(),
            expense.category.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV output: {}", e)))
}
