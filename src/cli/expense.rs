//! Expense CLI commands
//!
//! Implements `add`, `update`, `delete` and `list`.

use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, ExpensePatch, Money};
use crate::services::{ExpenseService, NewExpense};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description of the expense
    #[arg(short, long)]
    pub description: String,

    /// Amount spent (e.g., "12.50")
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Category of the expense
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID to update
    #[arg(short, long)]
    pub id: ExpenseId,

    /// New description for the expense
    #[arg(short, long)]
    pub description: Option<String>,

    /// New amount for the expense; every update must supply a positive one
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<Money>,

    /// New category for the expense
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID to delete
    #[arg(short, long)]
    pub id: ExpenseId,
}

pub fn handle_add_command(storage: &mut Storage, args: AddArgs) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).add(NewExpense {
        description: args.description,
        amount: args.amount,
        category: args.category,
    })?;

    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

pub fn handle_update_command(storage: &mut Storage, args: UpdateArgs) -> ExpenseResult<()> {
    let patch = ExpensePatch {
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    let expense = ExpenseService::new(storage).update(args.id, &patch)?;

    println!("Expense updated successfully (ID: {})", expense.id);
    Ok(())
}

pub fn handle_delete_command(storage: &mut Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).delete(args.id)?;

    println!("Expense deleted successfully (ID: {})", expense.id);
    Ok(())
}

pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    print!(
        "{}",
        format_expense_list(storage.expenses.all(), &settings.date_format)
    );
    Ok(())
}
