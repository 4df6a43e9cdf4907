//! Summary and budget display formatting

use crate::models::Budget;
use crate::reports::{BudgetSource, Summary};

/// Format a summary, including a warning line when a budget was exceeded
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    match summary {
        Summary::Overall { total } => {
            format!("Total expenses: {}\n", total.format_with_symbol(currency_symbol))
        }
        Summary::Monthly(monthly) => {
            let month = monthly.month.name();
            let mut output = format!(
                "Total expenses for {}: {}\n",
                month,
                monthly.total.format_with_symbol(currency_symbol)
            );

            if let Some(check) = monthly.exceeded_budget() {
                let limit = check.limit.format_with_symbol(currency_symbol);
                let warning = match check.source {
                    BudgetSource::Provided => {
                        format!("Warning: Expenses exceed provided budget of {} for {}", limit, month)
                    }
                    BudgetSource::Stored => format!(
                        "Warning: You have exceeded your stored budget of {} for {}",
                        limit, month
                    ),
                };
                output.push_str(&warning);
                output.push('\n');
            }

            output
        }
    }
}

/// Confirmation line for a budget that was just set
pub fn format_budget_set(budget: &Budget, currency_symbol: &str) -> String {
    format!(
        "Budget set successfully for {} {}: {}",
        budget.month_name(),
        budget.year,
        budget.amount.format_with_symbol(currency_symbol)
    )
}
