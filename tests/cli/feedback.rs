use crate::cli::support::{ecorec_at, run_json, setup_store};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_feedback_appends_to_log() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args(["feedback", "More refill options", "--name", "Asha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you"));

    let log = fs::read_to_string(dir.path().join("feedback.txt")).unwrap();
    assert_eq!(log, "Asha: More refill options\n");
}

#[test]
fn test_feedback_lands_on_thank_you_page() {
    let dir = setup_store();

    let output = run_json(dir.path(), &["feedback", "Great picks"]);
    assert_eq!(output["status"], "ok");
    assert_eq!(output["page"], "thank_you");
}

#[test]
fn test_feedback_rejects_empty_comment() {
    let dir = setup_store();

    ecorec_at(dir.path())
        .args(["feedback", "   "])
        .assert()
        .code(2);
    assert!(!dir.path().join("feedback.txt").exists());
}

#[test]
fn test_feedback_runs_do_not_share_navigation_state() {
    let dir = setup_store();

    for comment in ["First note", "Second note"] {
        let output = run_json(dir.path(), &["feedback", comment]);
        assert_eq!(output["page"], "thank_you");
        assert_eq!(output["next"], serde_json::json!(["main", "comparison"]));
    }

    let log = fs::read_to_string(dir.path().join("feedback.txt")).unwrap();
    assert_eq!(log.lines().count(), 2);
}
