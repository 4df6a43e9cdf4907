//! Expense repository
//!
//! Holds the expense collection in storage order and assigns identifiers.

use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpensePatch, Money};

use super::backend::Backend;

/// Repository for expense persistence
pub struct ExpenseRepository {
    backend: Box<dyn Backend<Expense>>,
    expenses: Vec<Expense>,
    /// Identifier handed out by the next `add`; only moves forward within a run.
    /// `None` once the id space is used up.
    next_id: Option<ExpenseId>,
}

impl ExpenseRepository {
    /// Create an empty repository over the given backend
    pub fn new(backend: Box<dyn Backend<Expense>>) -> Self {
        Self {
            backend,
            expenses: Vec::new(),
            next_id: Some(ExpenseId::new(1)),
        }
    }

    /// Load expenses and derive the next identifier from the highest one present
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.expenses = self.backend.load()?;
        self.next_id = match self.expenses.iter().map(|e| e.id).max() {
            Some(max) => max.next(),
            None => Some(ExpenseId::new(1)),
        };

        debug!(
            "Loaded {} expenses, next id {:?}",
            self.expenses.len(),
            self.next_id
        );
        Ok(())
    }

    /// Save all expenses
    pub fn save(&self) -> ExpenseResult<()> {
        self.backend.save(&self.expenses)?;
        debug!("Saved {} expenses", self.expenses.len());
        Ok(())
    }

    /// Append a new expense and return it
    ///
    /// Fails if the highest stored id leaves no room for another one.
    pub fn add(
        &mut self,
        date: DateTime<FixedOffset>,
        description: &str,
        amount: Money,
        category: Option<String>,
    ) -> ExpenseResult<&Expense> {
        let id = self.next_id.ok_or_else(|| {
            ExpenseError::Storage("No expense IDs left after the highest stored one".into())
        })?;
        self.next_id = id.next();
        self.expenses.push(Expense::new(id, date, description, amount, category));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Apply a partial update to the first expense with this ID
    pub fn update(&mut self, id: ExpenseId, patch: &ExpensePatch) -> Option<&Expense> {
        let expense = self.expenses.iter_mut().find(|e| e.id == id)?;
        expense.apply(patch);
        Some(&*expense)
    }

    /// Remove the first expense with this ID, keeping the order of the rest
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// All expenses in storage order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The identifier the next `add` will use
    pub fn next_id(&self) -> Option<ExpenseId> {
        self.next_id
    }
}
