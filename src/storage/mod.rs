//! Storage layer for the expense tracker
//!
//! Each collection is loaded wholesale at startup and written back wholesale
//! after a mutating command. The JSON file backend is used in production; the
//! memory backend lets tests and embedders skip the disk.

pub mod backend;
pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use backend::{Backend, JsonFileBackend, MemoryBackend};
pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or_init, write_json_atomic};

use std::fmt;

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;
use crate::models::{Budget, Expense};

/// The persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Expenses,
    Budgets,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Expenses => write!(f, "expenses"),
            Collection::Budgets => write!(f, "budgets"),
        }
    }
}

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Storage backed by the JSON files in the data directory
    pub fn open(paths: &TrackerPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self::with_backends(
            Box::new(JsonFileBackend::<Expense>::new(paths.expenses_file())),
            Box::new(JsonFileBackend::<Budget>::new(paths.budgets_file())),
        ))
    }

    /// Storage over arbitrary backends
    pub fn with_backends(
        expenses: Box<dyn Backend<Expense>>,
        budgets: Box<dyn Backend<Budget>>,
    ) -> Self {
        Self {
            expenses: ExpenseRepository::new(expenses),
            budgets: BudgetRepository::new(budgets),
        }
    }

    /// Storage that never touches the disk
    pub fn in_memory() -> Self {
        Self::with_backends(
            Box::new(MemoryBackend::<Expense>::new()),
            Box::new(MemoryBackend::<Budget>::new()),
        )
    }

    /// Load all data
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save one collection
    pub fn save(&self, collection: Collection) -> Result<(), ExpenseError> {
        match collection {
            Collection::Expenses => self.expenses.save(),
            Collection::Budgets => self.budgets.save(),
        }
    }
}
