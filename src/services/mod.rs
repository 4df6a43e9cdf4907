//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the messages users see when a request is refused.

pub mod budget;
pub mod expense;

pub use budget::{validate_month, BudgetService};
pub use expense::{ExpenseService, NewExpense};
