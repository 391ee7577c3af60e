use crate::cli::support::{ecorec_at, run_json, setup_sample_store, setup_store};
use predicates::prelude::*;

#[test]
fn test_list_empty_catalog() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn test_list_filters_by_category_and_attribute() {
    let dir = setup_sample_store();

    let listed = run_json(
        dir.path(),
        &["list", "-c", "Drinkware", "--carbon-neutral"],
    );
    let names: Vec<&str> = listed["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Steel Bottle"]);
    assert!(listed["alternatives"].as_array().unwrap().is_empty());
}

#[test]
fn test_list_sorted_by_price() {
    let dir = setup_sample_store();

    let listed = run_json(dir.path(), &["list", "--sort", "price-asc"]);
    let prices: Vec<f64> = listed["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![20.0, 40.0, 50.0, 80.0, 120.0, 300.0]);
}

#[test]
fn test_list_no_match_suggests_alternatives() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["list", "-c", "Drinkware", "--organic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products match the selected filters."))
        .stdout(predicate::str::contains("Try these alternatives:"))
        .stdout(predicate::str::contains("Organic Tote"));
}

#[test]
fn test_list_records_format() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["--format", "records", "list", "-c", "Bags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=list"))
        .stdout(predicate::str::contains("P name=\"Organic Tote\""));
}
