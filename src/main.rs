use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use expense_tracker::cli::{handle_command, Commands};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "A simple expense manager CLI application",
    long_about = "Records dated expenses, summarizes them by month and category, \
                  checks monthly totals against budgets and exports to CSV. \
                  Data is kept in expenses.json and budgets.json."
)]
struct Cli {
    /// Directory holding expenses.json and budgets.json (defaults to the current directory)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    let mut storage = Storage::open(&paths)?;
    storage.load_all().context("Error loading data")?;

    handle_command(&mut storage, &settings, &paths, cli.command)?;

    Ok(())
}
