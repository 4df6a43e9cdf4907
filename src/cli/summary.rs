//! Summary CLI command

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::reports::{summarize, SummaryQuery};
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to filter expenses by (1-12), in the current year; 0 means all months
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Category to filter expenses by
    #[arg(short, long)]
    pub category: Option<String>,

    /// Budget amount to check the monthly total against
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: Option<Money>,
}

pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let query = SummaryQuery {
        month: args.month,
        category: args.category,
        budget: args.budget,
    };

    let summary = summarize(storage, &query, Local::now().date_naive())?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
