//! Expense display formatting
//!
//! Renders the expense table printed by `list`.

use crate::models::Expense;

/// Format a single expense as a tab-separated table row
pub fn format_expense_row(expense: &Expense, date_format: &str) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        expense.id,
        expense.date.format(date_format),
        expense.description,
        expense.amount.to_decimal_string()
    )
}

/// Format all expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::from("ID\tDate\t\tDescription\tAmount\n");
    for expense in expenses {
        output.push_str(&format_expense_row(expense, date_format));
        output.push('\n');
    }

    output
}
