//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod summary;

pub use budget::{handle_budget_command, BudgetArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_update_command,
    AddArgs, DeleteArgs, UpdateArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use summary::{handle_summary_command, SummaryArgs};

use clap::Subcommand;
use log::error;

use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseResult;
use crate::storage::{Collection, Storage};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// Update an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// List all expenses
    List,

    /// Summarize expenses
    Summary(SummaryArgs),

    /// Set a monthly budget
    Budget(BudgetArgs),

    /// Export expenses to a file
    Export(ExportArgs),

    /// Show data file locations and settings
    Config(ConfigArgs),
}

impl Commands {
    /// The collection this command modifies, if any
    pub fn mutates(&self) -> Option<Collection> {
        match self {
            Commands::Add(_) | Commands::Update(_) | Commands::Delete(_) => {
                Some(Collection::Expenses)
            }
            Commands::Budget(_) => Some(Collection::Budgets),
            Commands::List
            | Commands::Summary(_)
            | Commands::Export(_)
            | Commands::Config(_) => None,
        }
    }
}

/// Run one command against loaded storage
///
/// Validation and not-found errors are printed and swallowed. Anything else
/// is returned to the caller as fatal.
pub fn handle_command(
    storage: &mut Storage,
    settings: &Settings,
    paths: &TrackerPaths,
    cmd: Commands,
) -> ExpenseResult<()> {
    let result = match cmd.mutates() {
        Some(collection) => with_persistence(storage, collection, |storage| {
            dispatch(storage, settings, paths, cmd)
        }),
        None => dispatch(storage, settings, paths, cmd),
    };

    match result {
        Err(err) if err.is_user_facing() => {
            println!("{}", err);
            Ok(())
        }
        other => other,
    }
}

fn dispatch(
    storage: &mut Storage,
    settings: &Settings,
    paths: &TrackerPaths,
    cmd: Commands,
) -> ExpenseResult<()> {
    match cmd {
        Commands::Add(args) => handle_add_command(storage, args),
        Commands::Update(args) => handle_update_command(storage, args),
        Commands::Delete(args) => handle_delete_command(storage, args),
        Commands::List => handle_list_command(storage, settings),
        Commands::Summary(args) => handle_summary_command(storage, settings, args),
        Commands::Budget(args) => handle_budget_command(storage, settings, args),
        Commands::Export(args) => handle_export_command(storage, settings, args),
        Commands::Config(args) => handle_config_command(storage, settings, paths, args),
    }
}

/// Run `run`, then write `collection` back whatever the outcome.
///
/// A failed save is logged; the in-memory change stays and is not retried.
pub fn with_persistence<T, F>(storage: &mut Storage, collection: Collection, run: F) -> ExpenseResult<T>
where
    F: FnOnce(&mut Storage) -> ExpenseResult<T>,
{
    let result = run(storage);

    if let Err(e) = storage.save(collection) {
        error!("Error saving {}: {}", collection, e);
    }

    result
}
