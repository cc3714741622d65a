mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("expense-bank-order"));
    cmd.arg(common::REQUEST_FIXTURE).arg("--today").arg("2024-03-01");

    let output = cmd.output()?;
    assert!(output.status.success());

    let order: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(order["id"], 1);
    assert_eq!(order["payment_date"], "2024-03-01");
    assert_eq!(order["accounting_trigger"], "realization");
    assert_eq!(order["functional_origin"], "expense");
    assert_eq!(order["lines"].as_array().map(Vec::len), Some(1));
    assert_eq!(order["lines"][0]["amount"], "75.00");

    Ok(())
}

#[test]
fn test_cli_csv_output() {
    let mut cmd = Command::new(cargo_bin!("expense-bank-order"));
    cmd.arg(common::REQUEST_FIXTURE)
        .arg("--today")
        .arg("2024-03-01")
        .arg("--format")
        .arg("csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "id,sequence,partner,amount,currency,date,label,file_format",
        ))
        .stdout(predicate::str::contains(
            "1,EXP-0007,Jo Doe,75.00,EUR,2024-03-01,EXP-0007 - Jo Doe,pain.001.001.03",
        ));
}

#[test]
fn test_cli_business_rule_failure() {
    let (mut expense, bank_details) = common::request();
    expense.company.currency.code = "USD".to_string();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    common::write_request(&path, &expense, &bank_details);

    let mut cmd = Command::new(cargo_bin!("expense-bank-order"));
    cmd.arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not support currency USD"));
}

#[test]
fn test_cli_rejects_bad_date() {
    let mut cmd = Command::new(cargo_bin!("expense-bank-order"));
    cmd.arg(common::REQUEST_FIXTURE).arg("--today").arg("01/03/2024");

    cmd.assert().failure();
}
