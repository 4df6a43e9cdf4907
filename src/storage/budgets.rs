//! Budget repository
//!
//! Keeps at most one budget per (month, year) pair.

use log::debug;

use crate::error::ExpenseResult;
use crate::models::Budget;

use super::backend::Backend;

/// Repository for monthly budget persistence
pub struct BudgetRepository {
    backend: Box<dyn Backend<Budget>>,
    budgets: Vec<Budget>,
}

impl BudgetRepository {
    pub fn new(backend: Box<dyn Backend<Budget>>) -> Self {
        Self {
            backend,
            budgets: Vec::new(),
        }
    }

    /// Load budgets from the backend
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.budgets = self.backend.load()?;
        debug!("Loaded {} budgets", self.budgets.len());
        Ok(())
    }

    /// Save all budgets
    pub fn save(&self) -> ExpenseResult<()> {
        self.backend.save(&self.budgets)?;
        debug!("Saved {} budgets", self.budgets.len());
        Ok(())
    }

    /// Get the budget for a month
    pub fn get(&self, month: u32, year: i32) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.is_for(month, year))
    }

    /// Insert a budget, replacing any existing one for the same month.
    ///
    /// Returns true if an existing budget was replaced.
    pub fn set(&mut self, budget: Budget) -> bool {
        match self
            .budgets
            .iter_mut()
            .find(|b| b.is_for(budget.month, budget.year))
        {
            Some(existing) => {
                *existing = budget;
                true
            }
            None => {
                self.budgets.push(budget);
                false
            }
        }
    }

    pub fn all(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn count(&self) -> usize {
        self.budgets.len()
    }
}
