use crate::cli::support::{ecorec_at, run_json, setup_sample_store};
use predicates::prelude::*;

#[test]
fn test_compare_two_products() {
    let dir = setup_sample_store();

    let output = run_json(dir.path(), &["compare", "Bamboo Comb", "Steel Bottle"]);
    let items = output.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Bamboo Comb");
    assert_eq!(items[0]["recyclable"], "Yes");
    assert_eq!(items[1]["sustainability_score"], 2);
    assert_eq!(items[1]["category_average"], 1.0);
}

#[test]
fn test_compare_human_shows_category_average() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["compare", "Bamboo Toothbrush", "Organic Tote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Avg:    1.50"))
        .stdout(predicate::str::contains("Category Avg:    3.00"));
}

#[test]
fn test_compare_needs_two_products() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["compare", "Bamboo Comb"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn test_compare_unknown_product() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["compare", "Bamboo Comb", "Glass Jar"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("product not found: Glass Jar"));
}
