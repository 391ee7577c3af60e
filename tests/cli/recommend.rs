use crate::cli::support::{ecorec_at, run_json, setup_sample_store, setup_store};
use predicates::prelude::*;
use std::fs;

const WORKED_EXAMPLE: &str = "\
Product Name,Category,Price,Recyclable,Organic,Carbon Neutral
Bamboo Toothbrush,Personal Care,50,Yes,Yes,No
Bamboo Comb,Personal Care,40,Yes,No,No
Plastic Bottle,Drinkware,20,No,No,No
";

#[test]
fn test_recommend_worked_example() {
    let dir = setup_store();
    fs::write(dir.path().join("products.csv"), WORKED_EXAMPLE).unwrap();

    let output = run_json(dir.path(), &["recommend", "Bamboo Toothbrush", "-n", "2"]);
    assert_eq!(output["status"], "ok");
    assert_eq!(
        output["recommendations"],
        serde_json::json!([
            { "name": "Bamboo Comb", "sustainability_score": 1, "price": 40.0 },
            { "name": "Plastic Bottle", "sustainability_score": 0, "price": 20.0 },
        ])
    );
}

#[test]
fn test_recommend_human_table() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["recommend", "Organic Tote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended for 'Organic Tote':"))
        .stdout(predicate::str::contains("Cotton Mesh Bag"));
}

#[test]
fn test_recommend_default_top_n_from_config() {
    let dir = setup_sample_store();

    let output = run_json(dir.path(), &["recommend", "Steel Bottle"]);
    assert_eq!(output["top_n"], 3);
    assert_eq!(output["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(output["recommendations"][0]["name"], "Plastic Bottle");
}

#[test]
fn test_recommend_unknown_product_is_empty_not_error() {
    let dir = setup_sample_store();

    let output = run_json(dir.path(), &["recommend", "Nonexistent"]);
    assert_eq!(output["status"], "unknown_product");
    assert!(output["recommendations"].as_array().unwrap().is_empty());

    ecorec_at(dir.path())
        .args(["recommend", "Nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recommendations found."));
}

#[test]
fn test_recommend_zero_and_negative_limit() {
    let dir = setup_sample_store();

    for n in ["0", "-2"] {
        let output = run_json(dir.path(), &["recommend", "Bamboo Comb", "-n", n]);
        assert_eq!(output["status"], "zero_limit");
        assert!(output["recommendations"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_recommend_empty_catalog() {
    let dir = setup_store();

    let output = run_json(dir.path(), &["recommend", "Anything"]);
    assert_eq!(output["status"], "empty_catalog");
}

#[test]
fn test_recommend_records_format() {
    let dir = setup_store();
    fs::write(dir.path().join("products.csv"), WORKED_EXAMPLE).unwrap();

    ecorec_at(dir.path())
        .args(["--format", "records", "recommend", "Bamboo Toothbrush", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=recommend status=ok items=1"))
        .stdout(predicate::str::contains("R name=\"Bamboo Comb\" score=1 price=40"));
}

#[test]
fn test_duplicates_finds_identical_entries() {
    let dir = setup_sample_store();
    let mut catalog = fs::read_to_string(dir.path().join("products.csv")).unwrap();
    catalog.push_str("Organic Tote,Bags,110,Yes,No,No\n");
    fs::write(dir.path().join("products.csv"), catalog).unwrap();

    let output = run_json(dir.path(), &["duplicates", "-t", "0.99"]);
    let pairs = output.as_array().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["first"]["name"], "Organic Tote");
    assert_eq!(pairs[0]["second"]["position"], 6);
}

#[test]
fn test_duplicates_rejects_out_of_range_threshold() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["duplicates", "-t", "1.5"])
        .assert()
        .code(2);
}
