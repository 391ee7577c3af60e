use crate::cli::support::{ecorec_at, run_json, setup_sample_store};
use predicates::prelude::*;

#[test]
fn test_picks_cheapest_perfect_scores_first() {
    let dir = setup_sample_store();

    let output = run_json(dir.path(), &["picks"]);
    let names: Vec<&str> = output["picks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cotton Mesh Bag", "Organic Tote"]);
    assert_eq!(output["highly_sustainable"], 4);
}

#[test]
fn test_picks_limit() {
    let dir = setup_sample_store();

    ecorec_at(dir.path())
        .args(["picks", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cotton Mesh Bag"))
        .stdout(predicate::str::contains("Organic Tote").not());
}
