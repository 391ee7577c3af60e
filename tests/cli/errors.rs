use crate::cli::support::{ecorec, ecorec_at, setup_store};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    ecorec().args(["--format", "yaml", "list"]).assert().code(2);
}

#[test]
fn test_missing_catalog_exit_code_3() {
    let dir = tempdir().unwrap();

    ecorec_at(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ecorec init"));
}

#[test]
fn test_missing_catalog_json_envelope() {
    let dir = tempdir().unwrap();

    let output = ecorec_at(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "catalog_not_found");
}

#[test]
fn test_parse_error_json_envelope() {
    let output = ecorec()
        .args(["--format", "json", "recommend"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_catalog_missing_column_is_data_error() {
    let dir = setup_store();
    fs::write(
        dir.path().join("products.csv"),
        "Product Name,Category\nComb,Personal Care\n",
    )
    .unwrap();

    ecorec_at(dir.path()).arg("list").assert().code(3);
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    ecorec_at(dir.path())
        .args(["--quiet", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
