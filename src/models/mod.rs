//! Core data models for the expense tracker
//!
//! Expenses, monthly budgets and the money and identifier types they share.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{month_from_number, Budget};
pub use expense::{Expense, ExpensePatch};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
