//! Config CLI command

use clap::Args;

use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the active settings to the settings file so they can be edited
    #[arg(long)]
    pub init: bool,
}

/// Print data file locations, record counts and active settings
pub fn handle_config_command(
    storage: &Storage,
    settings: &Settings,
    paths: &TrackerPaths,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if args.init {
        settings.save(paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        return Ok(());
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!(
        "Expenses file:  {} ({} records)",
        paths.expenses_file().display(),
        storage.expenses.count()
    );
    println!(
        "Budgets file:   {} ({} records)",
        paths.budgets_file().display(),
        storage.budgets.count()
    );
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    Ok(())
}
