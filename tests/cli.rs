use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "retail-pulse";

/// Helper to get a temporary working directory
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path under a simulated $HOME
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".retail-pulse").join("config.json")
}

/// Writes a small pair of valid tables and returns their locations.
fn write_fixtures(dir: &tempfile::TempDir) -> (PathBuf, PathBuf) {
    let transactions_path = dir.path().join("transactions.csv");
    let rfm_path = dir.path().join("rfm.csv");
    fs::write(
        &transactions_path,
        "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country,TotalPrice\n\
         536365,85123A,WHITE HANGING HEART T-LIGHT HOLDER,2,2010-12-01 08:26:00,5.0,17850,United Kingdom,10.0\n\
         536366,22423,REGENCY CAKESTAND 3 TIER,1,2011-01-15 10:00:00,20.0,12583,France,20.0\n",
    )
    .expect("write transactions fixture");
    fs::write(
        &rfm_path,
        "CustomerID,Recency,Frequency,Monetary,RFM_Score_Numeric,Segment\n\
         17850,10,5,372.86,12.0,Champions\n\
         12583,90,1,100.0,5.0,Lost\n",
    )
    .expect("write rfm fixture");
    (transactions_path, rfm_path)
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Summary over the fixture tables should report the full-slice KPIs.
fn summary_reports_kpis() {
    let tmp = temp_dir();
    let (transactions, rfm) = write_fixtures(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--transactions")
        .arg(&transactions)
        .arg("--rfm")
        .arg(&rfm)
        .assert()
        .success()
        .stdout(contains("KEY METRICS"))
        .stdout(contains("$30"))
        .stdout(contains("$15.00"))
        .stdout(contains("United Kingdom"))
        .stdout(contains("Champions"));
}

#[test]
/// A country filter should shrink the totals and report the share.
fn summary_applies_country_filter() {
    let tmp = temp_dir();
    let (transactions, rfm) = write_fixtures(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--transactions")
        .arg(&transactions)
        .arg("--rfm")
        .arg(&rfm)
        .arg("--country")
        .arg("France")
        .assert()
        .success()
        .stdout(contains("country: France"))
        .stdout(contains("(66.7% of total)"));
}

#[test]
/// A date filter keeps only rows inside the inclusive range.
fn summary_applies_date_filter() {
    let tmp = temp_dir();
    let (transactions, rfm) = write_fixtures(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--transactions")
        .arg(&transactions)
        .arg("--rfm")
        .arg(&rfm)
        .arg("--from")
        .arg("2011-01-01")
        .arg("--to")
        .arg("2011-12-31")
        .assert()
        .success()
        .stdout(contains("2011-01-01 -> 2011-12-31"))
        .stdout(contains("$20"));
}

#[test]
/// An unparsable date should be rejected by argument parsing.
fn summary_rejects_invalid_date() {
    let tmp = temp_dir();
    let (transactions, rfm) = write_fixtures(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--transactions")
        .arg(&transactions)
        .arg("--rfm")
        .arg(&rfm)
        .arg("--from")
        .arg("notadate")
        .assert()
        .failure()
        .stderr(contains("--from"));
}

#[test]
/// Missing tables should fail fast with the remediation hint.
fn missing_tables_report_remediation() {
    let tmp = temp_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--transactions")
        .arg(tmp.path().join("absent.csv"))
        .arg("--rfm")
        .arg(tmp.path().join("also_absent.csv"))
        .assert()
        .failure()
        .stdout(contains("Failed to load the data tables"))
        .stdout(contains("data-preparation pipeline"));
}

#[test]
/// set-data should persist locations that summary then resolves,
/// and reset-config should delete them again.
fn set_data_then_reset_roundtrip() {
    let tmp = temp_dir();
    let (transactions, rfm) = write_fixtures(&tmp);
    let config_path = config_file_path(&tmp);

    // Save the table locations under a simulated $HOME
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-data")
        .arg("--transactions")
        .arg(&transactions)
        .arg("--rfm")
        .arg(&rfm)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration saved"));
    assert!(config_path.exists());

    // Summary now works with no flags at all
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("KEY METRICS"));

    // Reset deletes the file
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration reset"));
    assert!(!config_path.exists());
}
