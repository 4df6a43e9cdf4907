//! Export module for the expense tracker
//!
//! Writes the expense collection to a user-named file:
//! - CSV: spreadsheet-compatible table (default)
//! - JSON: full records, machine-readable
//! - YAML: full records, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
pub use self::yaml::export_expenses_yaml;
