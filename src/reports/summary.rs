//! Expense summary report
//!
//! Totals expenses, optionally narrowed to a category and to one month of the
//! current year, and checks a monthly total against a budget.

use chrono::{Datelike, Month, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::services::budget::validate_month;
use crate::storage::Storage;

/// Filters for a summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryQuery {
    /// Month number 1-12, or 0 for no month filter; the year is always the
    /// current one
    pub month: Option<u32>,
    /// Exact category to include
    pub category: Option<String>,
    /// Budget to check against, taking precedence over a stored one
    pub budget: Option<Money>,
}

/// Where the budget used for comparison came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSource {
    /// Passed on the command line
    Provided,
    /// Stored with the `budget` command
    Stored,
}

/// A budget a monthly total was compared with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCheck {
    pub limit: Money,
    pub source: BudgetSource,
}

/// Total for one month of the current year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub year: i32,
    pub total: Money,
    pub budget: Option<BudgetCheck>,
}

impl MonthlySummary {
    /// The budget that was exceeded, if any
    pub fn exceeded_budget(&self) -> Option<&BudgetCheck> {
        self.budget.as_ref().filter(|b| self.total > b.limit)
    }
}

/// Result of a summary
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Total across all matching expenses
    Overall { total: Money },
    /// Total for a single month
    Monthly(MonthlySummary),
}

impl Summary {
    pub fn total(&self) -> Money {
        match self {
            Summary::Overall { total } => *total,
            Summary::Monthly(monthly) => monthly.total,
        }
    }
}

/// Build a summary of the stored expenses
///
/// `today` fixes the current year for the month filter and budget lookup.
pub fn summarize(
    storage: &Storage,
    query: &SummaryQuery,
    today: NaiveDate,
) -> ExpenseResult<Summary> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let in_category = |e: &&Expense| category.map_or(true, |c| e.has_category(c));

    let Some(month_number) = query.month.filter(|&m| m != 0) else {
        let total = storage.expenses.all().iter().filter(in_category).map(|e| e.amount).sum();
        return Ok(Summary::Overall { total });
    };

    let month = validate_month(month_number)?;
    let year = today.year();

    let total = storage
        .expenses
        .all()
        .iter()
        .filter(in_category)
        .filter(|e| e.is_in_month(month_number, year))
        .map(|e| e.amount)
        .sum();

    let budget = match query.budget.filter(|b| b.is_positive()) {
        Some(limit) => Some(BudgetCheck {
            limit,
            source: BudgetSource::Provided,
        }),
        None => storage.budgets.get(month_number, year).map(|b| BudgetCheck {
            limit: b.amount,
            source: BudgetSource::Stored,
        }),
    };

    Ok(Summary::Monthly(MonthlySummary {
        month,
        year,
        total,
        budget,
    }))
}
