//! Budget CLI command
//!
//! Sets the spending ceiling for one month.

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::format_budget_set;
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Arguments for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Budget amount
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Month to set the budget for (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to set the budget for (defaults to the current year, as does 0)
    #[arg(short, long)]
    pub year: Option<i32>,
}

pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    args: BudgetArgs,
) -> ExpenseResult<()> {
    let today = Local::now().date_naive();
    let budget = BudgetService::new(storage).set(args.month, args.year, args.amount, today)?;

    println!("{}", format_budget_set(&budget, &settings.currency_symbol));
    Ok(())
}
