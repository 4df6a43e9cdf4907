//! Expense model
//!
//! A single recorded outflow: when it happened, what it was for, how much it
//! cost and an optional category.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Sequential identifier, unique within the collection
    pub id: ExpenseId,

    /// When the expense was recorded, in the offset it was recorded under;
    /// never changes after creation
    pub date: DateTime<FixedOffset>,

    /// Free-text description
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    /// Create a new expense stamped with the given time
    pub fn new(
        id: ExpenseId,
        date: DateTime<FixedOffset>,
        description: impl Into<String>,
        amount: Money,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: category.filter(|c| !c.is_empty()),
        }
    }

    /// Whether the expense was recorded in the given calendar month, judged
    /// by the record's own offset
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }

    /// Exact, case-sensitive category match
    pub fn has_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Apply a partial update; returns true if any field changed
    pub fn apply(&mut self, patch: &ExpensePatch) -> bool {
        let mut changed = false;

        if let Some(description) = patch.description.as_deref().filter(|d| !d.is_empty()) {
            self.description = description.to_string();
            changed = true;
        }
        if let Some(amount) = patch.amount.filter(|a| !a.is_zero()) {
            self.amount = amount;
            changed = true;
        }
        if let Some(category) = patch.category.as_deref().filter(|c| !c.is_empty()) {
            self.category = Some(category.to_string());
            changed = true;
        }

        changed
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.description, self.amount)
    }
}

/// Replacement values for an expense update
///
/// Only present, non-empty (non-zero for the amount) fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}
