//! Reports for the expense tracker
//!
//! Report calculations are kept separate from their text rendering in
//! `display`.

pub mod summary;

pub use summary::{summarize, BudgetCheck, BudgetSource, MonthlySummary, Summary, SummaryQuery};
