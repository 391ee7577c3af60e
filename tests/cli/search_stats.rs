use crate::cli::support::{ecorec_at, run_json, setup_sample_store};
use predicates::prelude::*;

#[test]
fn test_search_is_case_insensitive() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["search", "BOTTLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plastic Bottle"))
        .stdout(predicate::str::contains("Steel Bottle"));
}

#[test]
fn test_search_no_match() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["search", "lamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found matching 'lamp'."));
}

#[test]
fn test_searches_feed_dashboard_terms() {
    let dir = setup_sample_store();

    for term in ["bottle", "comb", "bottle"] {
        ecorec_at(dir.path())
            .args(["--quiet", "search", term])
            .assert()
            .success();
    }
    ecorec_at(dir.path())
        .args(["search", "tote", "--no-log"])
        .assert()
        .success();

    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(
        stats["top_search_terms"],
        serde_json::json!([
            { "term": "bottle", "count": 2 },
            { "term": "comb", "count": 1 },
        ])
    );
}

#[test]
fn test_stats_overview() {
    let dir = setup_sample_store();

    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(stats["total_products"], 6);
    assert_eq!(stats["average_score"], 1.83);
    assert_eq!(
        stats["score_distribution"],
        serde_json::json!([
            { "score": 0, "count": 1 },
            { "score": 1, "count": 1 },
            { "score": 2, "count": 2 },
            { "score": 3, "count": 2 },
        ])
    );
    assert_eq!(stats["category_averages"][0]["category"], "Bags");
    assert!(stats["top_search_terms"].as_array().unwrap().is_empty());
}

#[test]
fn test_stats_lists_categories() {
    let dir = setup_sample_store();

    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(
        stats["categories"],
        serde_json::json!(["Bags", "Drinkware", "Personal Care"])
    );

    ecorec_at(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Categories:              Bags, Drinkware, Personal Care",
        ));

    ecorec_at(dir.path())
        .args(["--format", "records", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("K category=Drinkware"))
        .stdout(predicate::str::contains("K category=\"Personal Care\""));
}
