//! Budget service
//!
//! Sets monthly budget ceilings.

use chrono::{Datelike, NaiveDate};
use log::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{month_from_number, Budget, Money};
use crate::storage::Storage;

/// Message shown when a month is outside 1-12
pub const INVALID_MONTH: &str = "Invalid month. Please enter a value between 1 and 12.";

/// Message shown when `budget` is run without a month
pub const MONTH_REQUIRED: &str = "Month is required to set a budget.";

/// Message shown when a budget amount is zero or negative
pub const NON_POSITIVE_BUDGET: &str = "Budget amount must be a positive value.";

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a month, replacing any existing one.
    ///
    /// A month of 0 counts as missing. A missing or 0 `year` means the year
    /// of `today`.
    pub fn set(
        &mut self,
        month: Option<u32>,
        year: Option<i32>,
        amount: Money,
        today: NaiveDate,
    ) -> ExpenseResult<Budget> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(NON_POSITIVE_BUDGET.into()));
        }
        let month = month
            .filter(|&m| m != 0)
            .ok_or_else(|| ExpenseError::Validation(MONTH_REQUIRED.into()))?;
        validate_month(month)?;
        let year = year.filter(|&y| y != 0).unwrap_or_else(|| today.year());

        let budget = Budget::new(month, year, amount);
        let replaced = self.storage.budgets.set(budget.clone());

        info!(
            "{} budget {}",
            if replaced { "Replaced" } else { "Added" },
            budget
        );
        Ok(budget)
    }
}

/// Reject month numbers outside 1-12
pub fn validate_month(month: u32) -> ExpenseResult<chrono::Month> {
    month_from_number(month).ok_or_else(|| ExpenseError::Validation(INVALID_MONTH.into()))
}
