//! End-to-end tests for the centavo binary
//!
//! Each test runs against its own scratch data directory via the
//! CENTAVO_DATA_DIR override, so the ledger starts empty and invocations
//! within a test share state the way real runs do.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn centavo(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("centavo").unwrap();
    cmd.env("CENTAVO_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_entry_and_totals() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "Salary", "5000.00", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry"));

    centavo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("R$ 5.000,00"))
        .stdout(predicate::str::contains("01/01/2024"))
        .stdout(predicate::str::contains("Balance"));
}

#[test]
fn amount_and_date_are_normalized() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "Groceries", "-12.50", "2024-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-R$ 12,50"))
        .stdout(predicate::str::contains("05/03/2024"));
}

#[test]
fn empty_description_is_a_validation_error() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "", "100", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    // Ledger length unchanged
    centavo(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries"));
}

#[test]
fn summary_reports_income_expense_and_balance() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "Salary", "5000.00", "2024-01-01"])
        .assert()
        .success();
    centavo(&dir)
        .args(["add", "Rent", "-1200.00", "2024-01-02"])
        .assert()
        .success();

    centavo(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 5.000,00"))
        .stdout(predicate::str::contains("-R$ 1.200,00"))
        .stdout(predicate::str::contains("R$ 3.800,00"))
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn remove_deletes_the_given_row() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "Salary", "5000.00", "2024-01-01"])
        .assert()
        .success();
    centavo(&dir)
        .args(["add", "Rent", "-1200.00", "2024-01-02"])
        .assert()
        .success();

    centavo(&dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    centavo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn remove_out_of_range_fails_loudly() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry at row 3"));
}

#[test]
fn export_writes_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .args(["add", "Salary", "5000.00", "2024-01-01"])
        .assert()
        .success();

    centavo(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("description,amount,date"))
        .stdout(predicate::str::contains("Salary,5000.00,01/01/2024"));
}

#[test]
fn empty_ledger_lists_a_hint() {
    let dir = TempDir::new().unwrap();

    centavo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn corrupt_data_file_is_a_startup_error() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("transactions.json"), "not json at all").unwrap();

    centavo(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("transactions.json"));
}
