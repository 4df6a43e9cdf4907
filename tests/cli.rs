use std::fs;
use std::path::Path;

use assert_cmd::Command;
use chrono::{Datelike, Local, Month};
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.current_dir(dir).env_remove("EXPENSE_TRACKER_DATA_DIR");
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn current_month() -> (u32, &'static str) {
    let month = Local::now().month();
    let name = Month::try_from(month as u8).unwrap().name();
    (month, name)
}

#[test]
fn add_summary_delete_list() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.50"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");
    tracker(dir.path())
        .args(["add", "-d", "lunch", "-a", "12.00"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 2)\n");

    tracker(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $15.50\n");

    tracker(dir.path())
        .args(["delete", "-i", "1"])
        .assert()
        .success()
        .stdout("Expense deleted successfully (ID: 1)\n");

    tracker(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID\tDate\t\tDescription\tAmount\n"))
        .stdout(predicate::str::contains("\tlunch\t12.00\n"))
        .stdout(predicate::str::contains("coffee").not());
}

#[test]
fn first_run_creates_empty_files() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses recorded yet.\n");

    assert_eq!(fs::read_to_string(dir.path().join("expenses.json")).unwrap(), "[]");
    assert_eq!(fs::read_to_string(dir.path().join("budgets.json")).unwrap(), "[]");
}

#[test]
fn expenses_file_format() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "books", "-a", "20", "-c", "education"])
        .assert()
        .success();

    let contents = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(contents.contains("\n  {\n    \"id\": 1,"));

    let records = read_json(&dir.path().join("expenses.json"));
    assert_eq!(records[0]["description"], "books");
    assert_eq!(records[0]["amount"], 20.0);
    assert_eq!(records[0]["category"], "education");
    assert!(records[0]["date"].is_string());
}

#[test]
fn ids_continue_from_existing_maximum() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[{"id": 7, "date": "2020-01-01T10:00:00Z", "description": "old", "amount": 1.5}]"#,
    )
    .unwrap();

    tracker(dir.path())
        .args(["add", "-d", "new", "-a", "2"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 8)\n");
}

#[test]
fn non_positive_amount_is_rejected_without_failing() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "refund", "-a", "0"])
        .assert()
        .success()
        .stdout("Amount must be a positive value.\n");

    tracker(dir.path())
        .args(["add", "-d", "refund", "-a", "-4"])
        .assert()
        .success()
        .stdout("Amount must be a positive value.\n");

    assert_eq!(read_json(&dir.path().join("expenses.json")), serde_json::json!([]));
}

#[test]
fn update_only_changes_given_fields() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.50", "-c", "food"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["update", "-i", "1", "-a", "4.25"])
        .assert()
        .success()
        .stdout("Expense updated successfully (ID: 1)\n");

    let records = read_json(&dir.path().join("expenses.json"));
    assert_eq!(records[0]["amount"], 4.25);
    assert_eq!(records[0]["description"], "coffee");
    assert_eq!(records[0]["category"], "food");
}

#[test]
fn update_and_delete_unknown_id() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.50"])
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("expenses.json")).unwrap();

    tracker(dir.path())
        .args(["update", "-i", "5", "-d", "tea", "-a", "2"])
        .assert()
        .success()
        .stdout("Expense with ID 5 not found\n");

    tracker(dir.path())
        .args(["delete", "-i", "5"])
        .assert()
        .success()
        .stdout("Expense with ID 5 not found\n");

    let after = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn update_without_amount_is_refused() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.50"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["update", "-i", "1", "-d", "tea"])
        .assert()
        .success()
        .stdout("Amount must be a positive value.\n");

    let records = read_json(&dir.path().join("expenses.json"));
    assert_eq!(records[0]["description"], "coffee");
}

#[test]
fn amounts_keep_full_precision() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("expenses.json");

    tracker(dir.path())
        .args(["add", "-d", "tiny", "-a", "0.001"])
        .assert()
        .success();
    tracker(dir.path())
        .args(["add", "-d", "almost four", "-a", "3.999"])
        .assert()
        .success();
    let before = fs::read_to_string(&file).unwrap();

    tracker(dir.path())
        .args(["add", "-d", "odd", "-a", "1.005"])
        .assert()
        .success();
    let after = fs::read_to_string(&file).unwrap();

    assert!(after.starts_with(before.strip_suffix("\n]").unwrap()));
    let amounts: Vec<f64> = read_json(&file)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["amount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts, vec![0.001, 3.999, 1.005]);

    tracker(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\ttiny\t0.00\n"))
        .stdout(predicate::str::contains("\talmost four\t4.00\n"));
}

#[test]
fn exhausted_ids_do_not_panic() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[{"id": 18446744073709551615, "date": "2024-01-01T10:00:00+00:00", "description": "last", "amount": 9e16},
            {"id": 1, "date": "2024-01-02T10:00:00+00:00", "description": "big", "amount": 9e16}]"#,
    )
    .unwrap();

    tracker(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("18446744073709551615\t2024-01-01\tlast"));

    tracker(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total expenses: $180000000000000000.00"));

    tracker(dir.path())
        .args(["add", "-d", "one more", "-a", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense IDs left"));
}

#[test]
fn dates_use_recorded_offset() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[{"id": 1, "date": "2024-03-31T23:30:00-05:00", "description": "late", "amount": 2}]"#,
    )
    .unwrap();

    tracker(dir.path())
        .env("TZ", "UTC")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t2024-03-31\tlate\t2.00\n"));
}

#[test]
fn null_data_file_is_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "null").unwrap();

    tracker(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses recorded yet.\n");
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Settings written to"));

    let settings = read_json(&dir.path().join("expense-tracker.json"));
    assert_eq!(settings["currency_symbol"], "$");
    assert_eq!(settings["date_format"], "%Y-%m-%d");

    tracker(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn budget_set_twice_keeps_one_entry() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["budget", "-a", "100", "-m", "3", "-y", "2024"])
        .assert()
        .success()
        .stdout("Budget set successfully for March 2024: $100.00\n");

    tracker(dir.path())
        .args(["budget", "-a", "250.5", "-m", "3", "-y", "2024"])
        .assert()
        .success();

    let budgets = read_json(&dir.path().join("budgets.json"));
    assert_eq!(
        budgets,
        serde_json::json!([{"month": 3, "year": 2024, "amount": 250.5}])
    );
}

#[test]
fn budget_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["budget", "-a", "0", "-m", "3"])
        .assert()
        .success()
        .stdout("Budget amount must be a positive value.\n");

    tracker(dir.path())
        .args(["budget", "-a", "10", "-m", "13"])
        .assert()
        .success()
        .stdout("Invalid month. Please enter a value between 1 and 12.\n");

    assert_eq!(read_json(&dir.path().join("budgets.json")), serde_json::json!([]));
}

#[test]
fn budget_month_and_year_defaults() {
    let dir = TempDir::new().unwrap();
    let year = Local::now().year();

    tracker(dir.path())
        .args(["budget", "-a", "5"])
        .assert()
        .success()
        .stdout("Month is required to set a budget.\n");

    tracker(dir.path())
        .args(["budget", "-a", "5", "-m", "0"])
        .assert()
        .success()
        .stdout("Month is required to set a budget.\n");

    tracker(dir.path())
        .args(["budget", "-a", "5", "-m", "3", "-y", "0"])
        .assert()
        .success()
        .stdout(format!("Budget set successfully for March {year}: $5.00\n"));

    let budgets = read_json(&dir.path().join("budgets.json"));
    assert_eq!(budgets, serde_json::json!([{"month": 3, "year": year, "amount": 5.0}]));
}

#[test]
fn monthly_summary_warns_over_stored_budget() {
    let dir = TempDir::new().unwrap();
    let (month, name) = current_month();

    tracker(dir.path())
        .args(["add", "-d", "rent", "-a", "50"])
        .assert()
        .success();
    tracker(dir.path())
        .args(["budget", "-a", "10", "-m", &month.to_string()])
        .assert()
        .success();

    tracker(dir.path())
        .args(["summary", "-m", &month.to_string()])
        .assert()
        .success()
        .stdout(format!(
            "Total expenses for {name}: $50.00\n\
             Warning: You have exceeded your stored budget of $10.00 for {name}\n"
        ));
}

#[test]
fn monthly_summary_prefers_budget_flag() {
    let dir = TempDir::new().unwrap();
    let (month, name) = current_month();

    tracker(dir.path())
        .args(["add", "-d", "rent", "-a", "50", "-c", "home"])
        .assert()
        .success();
    tracker(dir.path())
        .args(["add", "-d", "snack", "-a", "5", "-c", "food"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["summary", "-m", &month.to_string(), "-c", "home", "-b", "40"])
        .assert()
        .success()
        .stdout(format!(
            "Total expenses for {name}: $50.00\n\
             Warning: Expenses exceed provided budget of $40.00 for {name}\n"
        ));
}

#[test]
fn summary_month_zero_is_overall_total() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.50"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["summary", "-m", "0"])
        .assert()
        .success()
        .stdout("Total expenses: $3.50\n");
}

#[test]
fn summary_rejects_invalid_month() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["summary", "-m", "13"])
        .assert()
        .success()
        .stdout("Invalid month. Please enter a value between 1 and 12.\n");
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.5", "-c", "food"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["export", "-f", "out.csv"])
        .assert()
        .success()
        .stdout("Expenses exported to out.csv\n");

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let today = Local::now().format("%Y-%m-%d");
    assert_eq!(
        csv,
        format!("ID,Date,Description,Amount,Category\n1,{today},coffee,3.50,food\n")
    );
}

#[test]
fn export_json_format() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee", "-a", "3.5"])
        .assert()
        .success();

    tracker(dir.path())
        .args(["export", "-f", "out.json", "--format", "json"])
        .assert()
        .success();

    let exported = read_json(&dir.path().join("out.json"));
    assert_eq!(exported[0]["description"], "coffee");
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["export", "-f", "no/such/dir/out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not create export file"));
}

#[test]
fn corrupt_data_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "{ not valid").unwrap();

    tracker(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn missing_required_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();

    tracker(dir.path())
        .args(["add", "-d", "coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--amount"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn data_dir_flag_and_env() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");

    tracker(dir.path())
        .args(["--data-dir", data.to_str().unwrap(), "add", "-d", "tea", "-a", "2"])
        .assert()
        .success();
    assert!(data.join("expenses.json").exists());

    tracker(dir.path())
        .env("EXPENSE_TRACKER_DATA_DIR", &data)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $2.00\n");
}

#[test]
fn settings_change_currency_symbol() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expense-tracker.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();

    tracker(dir.path())
        .args(["add", "-d", "bread", "-a", "2.20"])
        .assert()
        .success();

    tracker(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: €2.20\n");
}
