#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

fn run(db_path: &std::path::Path) -> serde_json::Value {
    let output = Command::new(cargo_bin!("expense-bank-order"))
        .arg("tests/fixtures/request.json")
        .arg("--today")
        .arg("2024-03-01")
        .arg("--db-path")
        .arg(db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_rocksdb_ids_continue_across_runs() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let first = run(&db_path);
    assert_eq!(first["id"], 1);

    // Same database: the sequence picks up where it stopped
    let second = run(&db_path);
    assert_eq!(second["id"], 2);
}
