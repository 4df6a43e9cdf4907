//! Expense Tracker - command-line expense tracking with monthly budgets
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary. Expenses and budgets are kept in two JSON files, loaded wholesale at
//! startup and written back after each command that changes them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and display settings
//! - `error`: Custom error types
//! - `models`: Expenses, budgets, money and identifiers
//! - `storage`: Persistence backends and the in-memory repositories
//! - `services`: Validation and mutation of the repositories
//! - `reports`: Summary calculations
//! - `display`: Plain-text rendering
//! - `export`: CSV, JSON and YAML export
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::Money;
//! use expense_tracker::services::{ExpenseService, NewExpense};
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::in_memory();
//! let expense = ExpenseService::new(&mut storage)
//!     .add(NewExpense {
//!         description: "coffee".into(),
//!         amount: Money::new(3.5),
//!         category: None,
//!     })
//!     .unwrap();
//! assert_eq!(expense.id.value(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
