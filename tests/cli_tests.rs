use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn momuney(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("momuney").unwrap();
    cmd.env("MOMUNEY_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str, vendor: &str, location: &str) {
    momuney(data_dir)
        .args([
            "transaction", "add", amount, "--category", category, "--date", date, "--vendor",
            vendor, "--location", location,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction"));
}

fn seed(data_dir: &TempDir) {
    add(data_dir, "10", "Food", "2025-01-01", "VendorA", "LocX");
    add(data_dir, "20", "Food", "2025-01-02", "VendorB", "LocY");
    add(data_dir, "5", "Rent", "2025-01-03", "VendorC", "LocX");
}

#[test]
fn init_creates_data_file() {
    let data_dir = TempDir::new().unwrap();

    momuney(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(data_dir.path().join("data").join("UserData.json").exists());
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn summary_without_transactions_prompts_for_input() {
    let data_dir = TempDir::new().unwrap();

    momuney(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please input a new transaction"));
}

#[test]
fn summary_by_location_keyword() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["summary", "--search-by", "location", "--keyword", "locx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("67%"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("33%"))
        .stdout(predicate::str::contains("Filter(s) updated!"));
}

#[test]
fn summary_with_no_matches() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["summary", "--search-by", "name", "--keyword", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found!"));
}

#[test]
fn reversed_date_range_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["summary", "--from", "2025-01-03", "--to", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn category_totals_after_delete() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("$5.00"));

    let store = std::fs::read_to_string(data_dir.path().join("data").join("UserData.json")).unwrap();
    let user: serde_json::Value = serde_json::from_str(&store).unwrap();
    let rent_id = user["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["category"] == "Rent")
        .and_then(|t| t["id"].as_str())
        .unwrap()
        .to_string();

    momuney(&data_dir)
        .args(["transaction", "delete", &rent_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    momuney(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn transaction_list_filters_by_date() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["transaction", "list", "--from", "2025-01-02", "--to", "2025-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VendorB"))
        .stdout(predicate::str::contains("VendorA").not())
        .stdout(predicate::str::contains("VendorC").not());
}

#[test]
fn vendor_list_shows_directory() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    momuney(&data_dir)
        .args(["vendor", "list", "--search", "vendorc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VendorC"))
        .stdout(predicate::str::contains("VendorA").not());
}

#[test]
fn export_json_contains_transactions() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);
    let output = data_dir.path().join("export.json");

    momuney(&data_dir)
        .args(["export", "json"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 transactions"));

    let export: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(export["metadata"]["transaction_count"], 3);
}

#[test]
fn corrupt_data_file_is_reported() {
    let data_dir = TempDir::new().unwrap();
    let data_file = data_dir.path().join("data").join("UserData.json");
    std::fs::create_dir_all(data_file.parent().unwrap()).unwrap();
    std::fs::write(&data_file, "{ not json").unwrap();

    momuney(&data_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "{ not json");
}

#[test]
fn invalid_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    momuney(&data_dir)
        .args(["transaction", "add", "ten", "--category", "Food", "--vendor", "Cafe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn oversized_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    momuney(&data_dir)
        .args([
            "transaction", "add", "100000000000000000", "--category", "Food", "--vendor", "Cafe",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    momuney(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn invalid_date_format_setting_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    momuney(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}
