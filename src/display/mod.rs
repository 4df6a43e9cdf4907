//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, summaries and budgets as plain
//! text.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_expense_row};
pub use summary::{format_budget_set, format_summary};
