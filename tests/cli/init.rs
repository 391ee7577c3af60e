use crate::cli::support::{ecorec, ecorec_at, setup_store};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and init tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    ecorec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ecorec"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    ecorec_at(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ecorec"));
}

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    ecorec_at(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ecorec store"));

    assert!(dir.path().join("ecorec.toml").exists());
    let catalog = std::fs::read_to_string(dir.path().join("products.csv")).unwrap();
    assert!(catalog.starts_with("Product Name,Category,Price"));
}

#[test]
fn test_init_refuses_existing_catalog() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_records_header() {
    let dir = tempdir().unwrap();

    ecorec_at(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H ecorec=1 records=1 mode=init"));
}
