//! Expense service
//!
//! Validates requests and applies them to the expense repository. Persisting
//! the result is left to the caller.

use chrono::{DateTime, FixedOffset, Local};
use log::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpensePatch, Money};
use crate::storage::Storage;

/// Message shown when an expense amount is zero or negative
pub const NON_POSITIVE_AMOUNT: &str = "Amount must be a positive value.";

/// A request to record a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense stamped with the current time
    pub fn add(&mut self, request: NewExpense) -> ExpenseResult<Expense> {
        self.add_at(request, Local::now().fixed_offset())
    }

    /// Record a new expense stamped with `date`
    pub fn add_at(
        &mut self,
        request: NewExpense,
        date: DateTime<FixedOffset>,
    ) -> ExpenseResult<Expense> {
        require_positive(request.amount)?;

        let expense = self
            .storage
            .expenses
            .add(date, &request.description, request.amount, request.category)?
            .clone();

        info!("Added expense {}", expense);
        Ok(expense)
    }

    /// Overwrite the supplied fields of an existing expense
    ///
    /// Every update must carry a positive amount, even when only the
    /// description or category is meant to change.
    pub fn update(&mut self, id: ExpenseId, patch: &ExpensePatch) -> ExpenseResult<Expense> {
        require_positive(patch.amount.unwrap_or_default())?;

        let expense = self
            .storage
            .expenses
            .update(id, patch)
            .cloned()
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        info!("Updated expense {}", expense);
        Ok(expense)
    }

    /// Remove an expense
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .delete(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        info!("Deleted expense {}", expense);
        Ok(expense)
    }

    /// All expenses in storage order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.all()
    }
}

fn require_positive(amount: Money) -> ExpenseResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(ExpenseError::Validation(NON_POSITIVE_AMOUNT.into()))
    }
}
