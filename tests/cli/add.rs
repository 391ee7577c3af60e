use crate::cli::support::{ecorec_at, run_json, setup_store};
use predicates::prelude::*;

#[test]
fn test_add_computes_score() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args([
            "add",
            "Bamboo Toothbrush",
            "-c",
            "Personal Care",
            "-p",
            "50",
            "--recyclable",
            "yes",
            "--organic",
            "yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sustainability score 2"));

    let listed = run_json(dir.path(), &["list"]);
    let products = listed["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Bamboo Toothbrush");
    assert_eq!(products[0]["carbon_neutral"], "No");
    assert_eq!(products[0]["sustainability_score"], 2);
}

#[test]
fn test_add_rejects_negative_price() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args(["add", "Comb", "-c", "Personal Care", "-p", "-3"])
        .assert()
        .code(2);
}

#[test]
fn test_add_rejects_bad_flag() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args(["add", "Comb", "-c", "Personal Care", "-p", "3", "--organic", "maybe"])
        .assert()
        .code(2);
}

#[test]
fn test_add_rejects_empty_name() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args(["add", "  ", "-c", "Personal Care", "-p", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_add_accepts_duplicate_name() {
    let dir = setup_store();

    let first = run_json(dir.path(), &["add", "Comb", "-c", "Personal Care", "-p", "10"]);
    assert_eq!(first["same_name"], 0);

    let second = run_json(dir.path(), &["add", "Comb", "-c", "Personal Care", "-p", "12"]);
    assert_eq!(second["same_name"], 1);

    ecorec_at(dir.path())
        .args(["add", "Comb", "-c", "Personal Care", "-p", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Note: 2 other product(s) already named 'Comb'",
        ));

    let listed = run_json(dir.path(), &["list"]);
    assert_eq!(listed["products"].as_array().unwrap().len(), 3);
}
